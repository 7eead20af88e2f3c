//! Cookie bridge example.
//!
//! Drives every bridge operation against the in-memory store.

use cookiebridge::cookies::bridge::CookieBridge;
use cookiebridge::cookies::monster::CookieMonster;
use serde_json::json;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let bridge = CookieBridge::new(CookieMonster::new());
    println!("Bridge: {}", CookieBridge::<CookieMonster>::NAME);

    println!("--- Step 1: Setting cookie from the application ---");
    let cookie = json!({
        "name": "session_id",
        "value": "abc123",
        "origin": "https://example.com",
        "path": "/",
        "expiration": "2099-01-15T10:30:00.000Z",
    });
    bridge.set_from_bag(cookie.as_object().ok_or("not an object")?)?;

    println!("--- Step 2: Applying a Set-Cookie response header ---");
    let applied = bridge.set_from_response(
        "https://example.com/login",
        "user_pref=dark_mode; Path=/; Max-Age=86400",
    )?;
    println!("Applied: {}", applied);

    println!("--- Step 3: Reading cookies back ---");
    for (name, value) in bridge.get("https://example.com/")? {
        println!("  {}={}", name, value);
    }

    println!("--- Step 4: Rejected descriptions ---");
    let missing = json!({"name": "x", "origin": "https://example.com"});
    if let Err(e) = bridge.set_from_bag(missing.as_object().ok_or("not an object")?) {
        println!("  {}", e);
    }
    if let Err(e) = bridge.get_all() {
        println!("  {}", e);
    }

    println!("--- Step 5: Clearing ---");
    bridge.clear_all().await;
    println!("Cookies left: {}", bridge.get("https://example.com/")?.len());

    Ok(())
}
