use super::*;

#[test]
fn valid_fields_build_a_trimmed_request() {
    let request =
        validate_kyc_fields("  Acme Pty Ltd ", " 2019/123456/07 ", "https://docs.example/reg.pdf")
            .unwrap();
    assert_eq!(request.company_name, "Acme Pty Ltd");
    assert_eq!(request.registration_number, "2019/123456/07");
    assert_eq!(request.document_url, "https://docs.example/reg.pdf");
}

#[test]
fn empty_company_name_is_rejected_first() {
    let err = validate_kyc_fields("  ", "123", "https://x").unwrap_err();
    assert_eq!(err, "Enter the registered company name.");
}

#[test]
fn empty_registration_number_is_rejected() {
    let err = validate_kyc_fields("Acme", "", "https://x").unwrap_err();
    assert_eq!(err, "Enter the company registration number.");
}

#[test]
fn non_http_document_link_is_rejected() {
    let err = validate_kyc_fields("Acme", "123", "ftp://share/reg.pdf").unwrap_err();
    assert_eq!(err, "Provide an http(s) link to the registration document.");
}
