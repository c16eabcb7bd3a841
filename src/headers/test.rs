use crate::headers::{FieldValue, Header, HeaderError, HeaderName, standard};

const fn is_send_sync<T: Send + Sync>() {}
const _: () = {
    is_send_sync::<Header>();
    is_send_sync::<HeaderName>();
    is_send_sync::<FieldValue>();
};

#[test]
fn serialize_wire_line() {
    assert_eq!(
        Header::content_type("text/html").serialize(),
        "Content-Type: text/html\r\n",
    );
    assert_eq!(
        Header::user_agent("preamble/0.1").serialize(),
        "User-Agent: preamble/0.1\r\n",
    );
    assert_eq!(
        Header::server("preamble").serialize(),
        "Server: preamble\r\n",
    );
    assert_eq!(
        Header::accept("text/plain").serialize(),
        "Accept: text/plain\r\n",
    );
    assert_eq!(
        Header::location("/elsewhere").serialize(),
        "Location: /elsewhere\r\n",
    );
}

#[test]
fn write_to_matches_serialize() {
    let header = Header::content_length(3245);
    let mut buf = bytes::BytesMut::new();
    header.write_to(&mut buf);
    assert_eq!(&buf[..], header.serialize().as_bytes());
}

#[test]
fn content_length() {
    assert_eq!(
        Header::content_length(3245).serialize(),
        "Content-Length: 3245\r\n",
    );

    let parsed = Header::content_length_from_str("3245").unwrap();
    assert_eq!(parsed, Header::content_length(3245));

    assert_eq!(
        Header::content_length_from_str("many"),
        Err(HeaderError::InvalidValue),
    );
    assert_eq!(
        Header::content_length_from_str("-1"),
        Err(HeaderError::InvalidValue),
    );
}

#[test]
fn connection_tokens() {
    let close = Header::connection("close").unwrap();
    assert_eq!(close, Header::CONNECTION_CLOSE);
    assert_eq!(close.serialize(), "Connection: close\r\n");

    let keep_alive = Header::connection("keep-alive").unwrap();
    assert_eq!(keep_alive, Header::CONNECTION_KEEP_ALIVE);
    assert_eq!(keep_alive.serialize(), "Connection: keep-alive\r\n");

    assert_eq!(
        Header::connection_index(1).unwrap(),
        Header::CONNECTION_KEEP_ALIVE,
    );

    assert_eq!(Header::connection("upgrade"), Err(HeaderError::InvalidValue));
    assert_eq!(Header::connection_index(2), Err(HeaderError::InvalidValue));
}

#[test]
fn host_with_port() {
    assert_eq!(
        Header::host("h", Some(443)).serialize(),
        "Host: h:443\r\n",
    );
    assert_eq!(Header::host("h", None).serialize(), "Host: h\r\n");
}

#[test]
fn authorization() {
    let mut auth = Header::authorization("Basic", "payload");
    assert_eq!(auth.serialize(), "Authorization: Basic payload\r\n");
    assert_eq!(auth.method(), Some("Basic"));
    assert_eq!(auth.payload(), Some("payload"));
    assert_eq!(auth.realm(), None);

    auth.set_method("Digest").unwrap();
    assert_eq!(auth.serialize(), "Authorization: Digest payload\r\n");

    // repeated identical mutation is idempotent
    auth.set_method("Digest").unwrap();
    assert_eq!(auth.serialize(), "Authorization: Digest payload\r\n");

    auth.set_payload("other").unwrap();
    assert_eq!(auth.serialize(), "Authorization: Digest other\r\n");

    assert_eq!(auth.set_realm("wally"), Err(HeaderError::InvalidValue));

    assert_eq!(
        Header::proxy_authorization("Basic", "payload").serialize(),
        "Proxy-Authorization: Basic payload\r\n",
    );
}

#[test]
fn www_authenticate() {
    let mut challenge = Header::www_authenticate("Basic", "realm name");
    assert_eq!(
        challenge.serialize(),
        "WWW-Authenticate: Basic realm=realm name\r\n",
    );
    assert_eq!(challenge.realm(), Some("realm name"));
    assert_eq!(challenge.payload(), None);

    challenge.set_realm("other realm").unwrap();
    assert_eq!(
        challenge.serialize(),
        "WWW-Authenticate: Basic realm=other realm\r\n",
    );

    assert_eq!(challenge.set_payload("nope"), Err(HeaderError::InvalidValue));

    assert_eq!(
        Header::proxy_authenticate("Basic", "wally").serialize(),
        "Proxy-Authenticate: Basic realm=wally\r\n",
    );
}

#[test]
fn custom_header() {
    let header = Header::custom("X-Answer", "42").unwrap();
    assert_eq!(header.serialize(), "X-Answer: 42\r\n");

    assert_eq!(
        Header::custom("X Answer", "42"),
        Err(HeaderError::InvalidValue),
    );
    assert_eq!(Header::custom("", "42"), Err(HeaderError::InvalidValue));
    assert_eq!(
        Header::custom("X-Answer", "4\r\n2"),
        Err(HeaderError::InvalidValue),
    );
}

#[test]
fn string_equality() {
    let accept = Header::accept("text/plain");
    assert_eq!(accept, "text/plain");
    assert_ne!(accept, "text/html");

    // equality against another header needs name and raw value to match
    assert_eq!(accept, Header::accept("text/plain"));
    assert_ne!(accept, Header::content_type("text/plain"));
    assert_ne!(Header::content_length(1), Header::content_length(2));
}

#[test]
fn ordering() {
    let accept = Header::accept("text/plain");
    let host = Header::host("h", None);

    // different names order by name
    assert!(accept < host);
    assert!(Header::content_length(9) < Header::content_length(10));

    // ordering against plain text is undefined, equality is not
    assert_eq!(accept.partial_cmp("text/plain"), None);
    assert_eq!(accept, "text/plain");

    let mut headers = vec![
        host.clone(),
        Header::content_length(10),
        accept.clone(),
    ];
    headers.sort();
    assert_eq!(headers[0], accept);
    assert_eq!(headers[1], Header::content_length(10));
    assert_eq!(headers[2], host);
}

#[test]
fn merge() {
    let mut accept = Header::accept("text/plain");
    accept.merge_str("text/html").unwrap();
    assert_eq!(accept.string_value(), "text/plain, text/html");
    assert_eq!(accept.serialize(), "Accept: text/plain, text/html\r\n");

    let mut accept = Header::accept("text/plain");
    accept.merge(&Header::accept("text/html")).unwrap();
    assert_eq!(accept.string_value(), "text/plain, text/html");

    // different names refuse to merge
    let mut accept = Header::accept("text/plain");
    assert_eq!(
        accept.merge(&Header::host("h", None)),
        Err(HeaderError::InvalidMerge),
    );

    // single valued headers refuse to merge
    let mut content_type = Header::content_type("text/plain");
    assert_eq!(
        content_type.merge_str("text/html"),
        Err(HeaderError::InvalidMerge),
    );
}

#[test]
fn merged_value_degrades_to_text() {
    let mut host = Header::host("a", None);
    host.merge(&Header::host("b", Some(80))).unwrap();
    assert_eq!(host.string_value(), "a, b:80");
    assert!(matches!(host.value(), FieldValue::Str(_)));
}

#[test]
fn standard_names_canonical() {
    assert_eq!(standard::CONTENT_TYPE.as_str(), "Content-Type");
    assert_eq!(standard::WWW_AUTHENTICATE.as_str(), "WWW-Authenticate");
    assert!(standard::CONTENT_TYPE.eq_ignore_ascii_case("content-type"));
}
