use super::*;

fn transport(config: ServiceConfig) -> HttpRequest {
    HttpRequest::new(config).unwrap()
}

#[test]
fn attaches_exactly_one_auth_header() {
    let http = transport(
        ServiceConfig::new("tok3n")
            .with_header("Authorization", "Bearer stale")
            .with_header("GData-Version", "3.0"),
    );

    for (method, body) in [
        (Method::GET, None),
        (Method::POST, Some("<entry/>")),
        (Method::DELETE, None),
    ] {
        let request = http
            .prepare(method, "feeds/spreadsheets/private/full", body)
            .unwrap();
        let auth: Vec<_> = request.headers().get_all(AUTHORIZATION).iter().collect();
        assert_eq!(auth, vec!["OAuth tok3n"]);
        assert_eq!(request.headers()["GData-Version"], "3.0");
    }
}

#[test]
fn post_is_sent_as_atom() {
    let http = transport(ServiceConfig::new("t").with_header("Content-Type", "text/plain"));
    let request = http.prepare(Method::POST, "feeds/x", Some("<entry/>")).unwrap();

    let content_types: Vec<_> = request.headers().get_all(CONTENT_TYPE).iter().collect();
    assert_eq!(content_types, vec![ATOM_CONTENT_TYPE]);
    assert_eq!(request.body().and_then(|b| b.as_bytes()), Some(&b"<entry/>"[..]));

    let plain = transport(ServiceConfig::new("t"));
    let get = plain.prepare(Method::GET, "feeds/x", None).unwrap();
    assert!(get.headers().get(CONTENT_TYPE).is_none());
}

#[test]
fn resolves_relative_paths_against_service_url() {
    let http = transport(ServiceConfig::new("t"));
    assert_eq!(
        http.resolve("feeds/spreadsheets/private/full").unwrap().as_str(),
        "https://spreadsheets.google.com/feeds/spreadsheets/private/full"
    );

    let absolute = "https://spreadsheets.google.com/feeds/worksheets/key/private/full";
    assert_eq!(http.resolve(absolute).unwrap().as_str(), absolute);
}

#[test]
fn service_url_without_trailing_slash() {
    let http = transport(ServiceConfig::new("t").with_service_url("http://127.0.0.1:8080/api"));
    assert_eq!(
        http.resolve("feeds/x").unwrap().as_str(),
        "http://127.0.0.1:8080/api/feeds/x"
    );
}

#[test]
fn rejects_bad_configuration() {
    assert!(matches!(
        HttpRequest::new(ServiceConfig::new("t").with_service_url("not a url")),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        HttpRequest::new(ServiceConfig::new("t").with_header("bad header", "x")),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        HttpRequest::new(ServiceConfig::new("line\nbreak")),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn status_codes() {
    assert_eq!(check_status(200, "ok".to_owned()).unwrap(), "ok");
    assert_eq!(check_status(201, String::new()).unwrap(), "");

    for status in [300, 302, 401, 404, 500] {
        match check_status(status, "nope".to_owned()) {
            Err(Error::Request { status: s, body }) => {
                assert_eq!(s, status);
                assert_eq!(body, "nope");
            }
            other => panic!("expected a request error for {status}, got {other:?}"),
        }
    }
}
