use std::net::IpAddr;

use actix_web::HttpRequest;

/// Client address used as a rate-limit key. The first `X-Forwarded-For` hop is
/// only honoured behind a trusted proxy and only when it parses as an IP.
pub fn get_client_ip(req: &HttpRequest, trust_x_forwarded_for: bool) -> String {
    if trust_x_forwarded_for {
        let forwarded = req
            .headers()
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .and_then(|first| first.trim().parse::<IpAddr>().ok());

        if let Some(ip) = forwarded {
            return ip.to_string();
        }
    }

    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn ignores_forwarded_header_unless_trusted() {
        let req = TestRequest::default()
            .peer_addr("10.0.0.1:5000".parse().unwrap())
            .insert_header(("x-forwarded-for", "203.0.113.7, 10.0.0.1"))
            .to_http_request();

        assert_eq!(get_client_ip(&req, false), "10.0.0.1");
        assert_eq!(get_client_ip(&req, true), "203.0.113.7");
    }

    #[test]
    fn falls_back_to_peer_on_garbage_header() {
        let req = TestRequest::default()
            .peer_addr("10.0.0.2:5000".parse().unwrap())
            .insert_header(("x-forwarded-for", "not-an-ip"))
            .to_http_request();

        assert_eq!(get_client_ip(&req, true), "10.0.0.2");
    }
}
