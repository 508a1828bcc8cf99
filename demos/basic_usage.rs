use admin_session::{
    current_timestamp, token_from_cookie_header, Claims, Secret, SessionCookie, SessionService,
};

fn main() {
    // Secret shared by issuance and verification
    let secret = Secret::new("my-admin-secret-for-hmac-sha256").expect("Secret must not be empty");
    let service = SessionService::new(secret);

    // Login: issue a 7 day session and store it in a cookie
    let ttl = 60 * 60 * 24 * 7;
    let token = service.issue(ttl).expect("Failed to issue token");
    let cookie = SessionCookie::issued(token.clone(), ttl, true);
    println!("Set-Cookie: {}", cookie.to_header_value());

    // Later request: find the cookie and check it
    let request_cookies = format!("theme=dark; {}={}", cookie.name, cookie.value);
    let presented = token_from_cookie_header(&request_cookies);
    match service.verify(presented) {
        Ok(claims) => println!(
            "Accepted {} session, expires at {}",
            claims.subject, claims.expires_at
        ),
        Err(rejection) => println!("Rejected: {}", rejection.code()),
    }

    // Tampered token
    let mut tampered = token.into_bytes();
    tampered[4] = if tampered[4] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(tampered).expect("Token is ASCII");
    print_outcome(&service, "tampered", Some(&tampered));

    // Expired token, signed correctly
    let now = current_timestamp();
    let expired = service
        .issue_claims(&Claims {
            expires_at: now - 10,
            ..Claims::issued_at(now - 3600, 1)
        })
        .expect("Failed to issue token");
    print_outcome(&service, "expired", Some(&expired));

    // Missing and malformed tokens
    print_outcome(&service, "missing", None);
    print_outcome(&service, "malformed", Some("onlyonesegmentnodots"));

    // Status endpoint body
    let status = service.status(presented);
    println!(
        "Status: {}",
        serde_json::to_string(&status).expect("Status serializes")
    );

    // Logout
    println!("Set-Cookie: {}", SessionCookie::cleared(true).to_header_value());
}

fn print_outcome(service: &SessionService, label: &str, token: Option<&str>) {
    match service.verify(token) {
        Ok(_) => println!("{label}: accepted"),
        Err(rejection) => println!("{label}: rejected ({})", rejection.code()),
    }
}
