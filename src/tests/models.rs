use crate::api::models::{check_error, Address, NewContact, Params};
use crate::api::{ApiError, ApiReply, RecordKind};
use crate::cli::output;
use serde_json::json;

fn address() -> Address {
    Address {
        line_1: "1 Main St".to_string(),
        line_2: "Building B".to_string(),
        line_3: "Floor 3".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        country: "US".to_string(),
        zipcode: "62701".to_string(),
    }
}

#[test]
fn test_address_params() {
    let params = address().to_params();
    assert_eq!(
        params.as_pairs(),
        [
            ("address-line-1", "1 Main St".to_string()),
            ("address-line-2", "Building B".to_string()),
            ("address-line-3", "Floor 3".to_string()),
            ("city", "Springfield".to_string()),
            ("state", "IL".to_string()),
            ("country", "US".to_string()),
            ("zipcode", "62701".to_string()),
        ]
    );
}

#[test]
fn test_contact_params_include_address() {
    let contact = NewContact {
        contact_type: "Contact".to_string(),
        name: "Jo Doe".to_string(),
        company: "Acme".to_string(),
        email: "jo@example.org".to_string(),
        address: address(),
        phone_cc: "1".to_string(),
        phone: "5550100".to_string(),
        customer_id: 77,
    };

    let params = contact.to_params();
    assert_eq!(params.get("type"), Some("Contact"));
    assert_eq!(params.get("customer-id"), Some("77"));
    assert_eq!(params.get("phone-cc"), Some("1"));
    assert_eq!(params.get("address-line-3"), Some("Floor 3"));
    assert_eq!(params.get("zipcode"), Some("62701"));
}

#[test]
fn test_params_skip_absent_values() {
    let mut params = Params::new();
    params
        .push_opt("host", None::<&str>)
        .push_opt("ttl", Some(60))
        .push_all("ns", ["a", "b"]);
    assert_eq!(
        params.as_pairs(),
        [
            ("ttl", "60".to_string()),
            ("ns", "a".to_string()),
            ("ns", "b".to_string()),
        ]
    );
}

#[test]
fn test_record_kind_mapping() {
    assert_eq!(RecordKind::from_record_type("A"), Some(RecordKind::Ipv4));
    assert_eq!(RecordKind::from_record_type("AAAA"), Some(RecordKind::Ipv6));
    assert_eq!(RecordKind::from_record_type("CNAME"), Some(RecordKind::Cname));
    assert_eq!(RecordKind::from_record_type("TXT"), None);
    assert_eq!(RecordKind::from_record_type("a"), None);

    assert_eq!(RecordKind::Ipv4.path_segment(), "ipv4");
    assert_eq!(RecordKind::Ipv6.path_segment(), "ipv6");
    assert_eq!(RecordKind::Cname.path_segment(), "cname");
}

#[test]
fn test_reply_decode() {
    assert_eq!(
        ApiReply::decode(json!({"status": "ERROR", "message": "domain not found"})),
        ApiReply::Failure {
            message: "domain not found".to_string()
        }
    );
    assert_eq!(
        ApiReply::decode(json!({"status": "Success"})),
        ApiReply::Success(json!({"status": "Success"}))
    );
    // only objects carry the marker
    assert_eq!(
        ApiReply::decode(json!(["ERROR"])),
        ApiReply::Success(json!(["ERROR"]))
    );
    assert_eq!(
        ApiReply::decode(json!({"status": "error"})),
        ApiReply::Success(json!({"status": "error"}))
    );
}

#[test]
fn test_check_error() {
    let err = check_error(json!({"status": "ERROR", "message": "domain not found"})).unwrap_err();
    assert!(matches!(&err, ApiError::Remote { message } if message == "domain not found"));
    assert_eq!(err.to_string(), "domain not found");

    let body = json!({"entityid": "1"});
    assert_eq!(check_error(body.clone()).unwrap(), body);
}

#[test]
fn test_render_sorts_keys() {
    let rendered = output::render(&json!({"zeta": 1, "alpha": {"b": 2, "a": [1, 2]}})).unwrap();
    let expected = [
        "{",
        "  \"alpha\": {",
        "    \"a\": [",
        "      1,",
        "      2",
        "    ],",
        "    \"b\": 2",
        "  },",
        "  \"zeta\": 1",
        "}",
    ]
    .join("\n");
    assert_eq!(rendered, expected);
}

#[test]
fn test_exit_code() {
    assert_eq!(output::exit_code(&json!({"error": "Record already exists"})), 1);
    assert_eq!(output::exit_code(&json!({"status": "Success"})), 0);
    assert_eq!(output::exit_code(&json!([{"error": "nested"}])), 0);
    assert_eq!(output::exit_code(&json!("error")), 0);
}

#[test]
fn test_print_result_writes_line() {
    let mut out = Vec::<u8>::new();
    output::print_result(&mut out, &json!({"b": 1, "a": 2})).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "{\n  \"a\": 2,\n  \"b\": 1\n}\n"
    );
}
