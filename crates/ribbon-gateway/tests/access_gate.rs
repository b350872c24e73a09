#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::{HeaderMap, HeaderValue, Uri};

use ribbon_core::Result;
use ribbon_gateway::gate::{AccessGate, Guard, OriginFilter, RequestView, SecretVerifier};

const SECRET: &str = "TsumuMika$pixte0";

struct Req {
    headers: HeaderMap,
    uri: Uri,
    peer: Option<IpAddr>,
}

impl Req {
    fn new(uri: &str) -> Self {
        Self {
            headers: HeaderMap::new(),
            uri: uri.parse().unwrap(),
            peer: Some("203.0.113.9".parse().unwrap()),
        }
    }

    fn header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.insert(name, HeaderValue::from_str(value).unwrap());
        self
    }

    fn raw_header(mut self, name: &'static str, value: &[u8]) -> Self {
        self.headers.insert(name, HeaderValue::from_bytes(value).unwrap());
        self
    }

    fn peer(mut self, ip: Option<&str>) -> Self {
        self.peer = ip.map(|s| s.parse().unwrap());
        self
    }

    fn view(&self) -> RequestView<'_> {
        RequestView {
            headers: &self.headers,
            uri: &self.uri,
            peer: self.peer,
        }
    }
}

/// Admits everything and counts how often it was asked.
#[derive(Default)]
struct CountingGuard {
    calls: AtomicUsize,
}

impl Guard for CountingGuard {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn check(&self, _req: &RequestView<'_>) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn verifier(secret: Option<&str>) -> SecretVerifier {
    SecretVerifier::new(secret.map(str::to_string), "x-tsumugi-token", "token")
}

fn code(res: Result<()>) -> &'static str {
    res.expect_err("expected denial").client_code().as_str()
}

#[test]
fn empty_allow_list_admits_any_origin() {
    let filter = OriginFilter::new(Vec::<String>::new());
    assert!(!filter.enabled());
    assert!(filter.check(&Req::new("/core").view()).is_ok());
    assert!(filter.check(&Req::new("/core").peer(None).view()).is_ok());
}

#[test]
fn peer_address_checked_when_no_forwarded_header() {
    let filter = OriginFilter::new(["203.0.113.9"]);
    assert!(filter.check(&Req::new("/core").view()).is_ok());

    let other = Req::new("/core").peer(Some("198.51.100.1"));
    assert_eq!(code(filter.check(&other.view())), "forbidden_origin");
}

#[test]
fn forwarded_for_first_entry_wins() {
    let filter = OriginFilter::new(["1.2.3.4"]);

    let req = Req::new("/core").header("x-forwarded-for", " 1.2.3.4 , 10.0.0.1");
    assert!(filter.check(&req.view()).is_ok());

    // allowed address later in the chain does not count
    let req = Req::new("/core").header("x-forwarded-for", "10.0.0.1, 1.2.3.4");
    assert_eq!(code(filter.check(&req.view())), "forbidden_origin");
}

#[test]
fn present_forwarded_for_never_falls_back_to_peer() {
    // allow-listed proxy address as peer; the header still decides
    let filter = OriginFilter::new(["10.0.0.5"]);

    let admitted = Req::new("/core").peer(Some("10.0.0.5"));
    assert!(filter.check(&admitted.view()).is_ok());

    for value in [", 6.6.6.6", "", "  ,10.0.0.5"] {
        let req = Req::new("/core")
            .peer(Some("10.0.0.5"))
            .header("x-forwarded-for", value);
        assert_eq!(code(filter.check(&req.view())), "forbidden_origin", "xff={value:?}");
    }

    let req = Req::new("/core")
        .peer(Some("10.0.0.5"))
        .raw_header("x-forwarded-for", &[0xff, 0xfe]);
    assert_eq!(OriginFilter::effective_origin(&req.view()), None);
    assert_eq!(code(filter.check(&req.view())), "forbidden_origin");
}

#[test]
fn no_prefix_matching() {
    let filter = OriginFilter::new(["10.0.0.1"]);
    let req = Req::new("/core").header("x-forwarded-for", "10.0.0.10");
    assert_eq!(code(filter.check(&req.view())), "forbidden_origin");
}

#[test]
fn enabled_filter_denies_unknown_origin() {
    let filter = OriginFilter::new(["1.2.3.4"]);
    let req = Req::new("/core").peer(None);
    assert_eq!(code(filter.check(&req.view())), "forbidden_origin");
}

#[test]
fn missing_server_secret_fails_closed() {
    for v in [verifier(None), verifier(Some(""))] {
        assert!(!v.configured());
        let req = Req::new("/core?token=anything").header("x-tsumugi-token", "anything");
        assert_eq!(code(v.check(&req.view())), "server_misconfigured");
        assert_eq!(code(v.check(&Req::new("/core").view())), "server_misconfigured");
    }
}

#[test]
fn secret_from_header_or_query() {
    let v = verifier(Some(SECRET));

    let req = Req::new("/core").header("x-tsumugi-token", SECRET);
    assert!(v.check(&req.view()).is_ok());

    // `$` percent-encoded in the query string
    let req = Req::new("/core?token=TsumuMika%24pixte0");
    assert!(v.check(&req.view()).is_ok());

    assert_eq!(code(v.check(&Req::new("/core").view())), "unauthorized");
    assert_eq!(code(v.check(&Req::new("/core?token=nope").view())), "unauthorized");
}

#[test]
fn header_takes_precedence_over_query() {
    let v = verifier(Some(SECRET));

    let req = Req::new("/core?token=TsumuMika%24pixte0").header("x-tsumugi-token", "wrong");
    assert_eq!(code(v.check(&req.view())), "unauthorized");

    let req = Req::new("/core?token=wrong").header("x-tsumugi-token", SECRET);
    assert!(v.check(&req.view()).is_ok());
}

#[test]
fn repeated_query_secret_is_rejected() {
    let v = verifier(Some(SECRET));

    for uri in [
        "/core?token=x&token=TsumuMika%24pixte0",
        "/core?token=TsumuMika%24pixte0&token=TsumuMika%24pixte0",
        "/core?token=TsumuMika%24pixte0&token=",
    ] {
        assert_eq!(code(v.check(&Req::new(uri).view())), "unauthorized", "uri={uri}");
    }

    // other parameters alongside a single secret are fine
    let req = Req::new("/memory/load?key=note1&token=TsumuMika%24pixte0");
    assert!(v.check(&req.view()).is_ok());
}

#[test]
fn custom_header_and_param_names() {
    let v = SecretVerifier::new(Some("k".into()), "x-ribbon-key", "key");
    assert!(v.check(&Req::new("/memory/list?key=k").view()).is_ok());
    assert!(v.check(&Req::new("/memory/list").header("x-ribbon-key", "k").view()).is_ok());
    assert_eq!(
        code(v.check(&Req::new("/memory/list").header("x-tsumugi-token", "k").view())),
        "unauthorized"
    );
}

#[test]
fn origin_denial_skips_secret_check() {
    let counter = Arc::new(CountingGuard::default());
    let gate = AccessGate::new()
        .with_guard(Arc::new(OriginFilter::new(["1.2.3.4"])))
        .with_guard(counter.clone());

    let req = Req::new("/core").peer(Some("9.9.9.9"));
    assert_eq!(code(gate.admit(&req.view())), "forbidden_origin");
    assert_eq!(counter.calls.load(Ordering::SeqCst), 0);

    let req = Req::new("/core").peer(Some("1.2.3.4"));
    assert!(gate.admit(&req.view()).is_ok());
    assert_eq!(counter.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn empty_allow_list_reaches_secret_check() {
    let counter = Arc::new(CountingGuard::default());
    let gate = AccessGate::new()
        .with_guard(Arc::new(OriginFilter::new(Vec::<String>::new())))
        .with_guard(counter.clone());

    for ip in ["1.1.1.1", "::1", "192.168.0.7"] {
        let req = Req::new("/core").peer(Some(ip));
        assert!(gate.admit(&req.view()).is_ok());
    }
    assert_eq!(counter.calls.load(Ordering::SeqCst), 3);
}

#[test]
fn from_config_orders_origin_before_secret() {
    let cfg = ribbon_gateway::config::GatewayConfig::default();
    let gate = AccessGate::from_config(&cfg);
    assert_eq!(gate.guard_names(), vec!["origin", "secret"]);
}
