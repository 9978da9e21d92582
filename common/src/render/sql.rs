pub const PUBLIC_KEY_HEADER: &str = "-----BEGIN PUBLIC KEY-----";
pub const PUBLIC_KEY_FOOTER: &str = "-----END PUBLIC KEY-----";

/// Base64 body of a SubjectPublicKeyInfo PEM on a single line.
///
/// Removes the PEM markers and every line break, then trims surrounding
/// whitespace. The input is not validated.
pub fn public_key_payload(public_key_pem: &str) -> String {
    public_key_pem
        .replace(PUBLIC_KEY_HEADER, "")
        .replace(PUBLIC_KEY_FOOTER, "")
        .replace(['\r', '\n'], "")
        .trim()
        .to_string()
}

/// `ALTER USER` statement assigning the public key to `user`.
///
/// `user` is embedded verbatim and must already be a valid identifier.
pub fn render_grant_sql(user: &str, public_key_pem: &str) -> String {
    format!(
        "ALTER USER {}\n    SET RSA_PUBLIC_KEY = '{}'\n;",
        user,
        public_key_payload(public_key_pem)
    )
}
