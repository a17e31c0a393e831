//! Sign a token, verify it and peek at its payload
//!
//! Run with `RUST_LOG=hsjwt=debug cargo run --example usage` to see why
//! rejected tokens were rejected.

use hsjwt::{decode_payload, Jwt, JwtError};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let secret = "4321";
    let claims = json!({
        "sub": "4321",
        "name": "matheesha",
        "exp": chrono::Utc::now().timestamp() + 30,
    });

    let token = Jwt::hs512()
        .with_secret(secret)
        .on_error(|e| {
            eprintln!("signing failed: {e}");
            e
        })
        .sign(claims)
        .await?;
    println!("token: {token}");

    let outcome = Jwt::builder().with_secret(secret).verify(&token).await?;
    println!("verify: {}", serde_json::to_string(&outcome)?);

    let rejected = Jwt::builder()
        .with_secret("not-the-secret")
        .verify(&token)
        .await?;
    println!("verify with another secret: {}", serde_json::to_string(&rejected)?);

    let payload = decode_payload(&token)?;
    println!("payload (unverified): {}", serde_json::Value::Object(payload));

    let missing: Result<_, JwtError> = Jwt::hs256().sign(json!({})).await;
    if let Err(e) = missing {
        println!("without a secret: {e}");
    }

    Ok(())
}
