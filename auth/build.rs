const FORWARDED: [&str; 3] = [
    "AAK_API_BASE_URL",
    "AAK_SEND_CONFIRM_PASSWORD",
    "AAK_TOAST_DURATION_MS",
];

fn main() {
    println!("cargo:rerun-if-changed=.env");
    // optional; variables already set in the environment win
    dotenvy::dotenv().ok();

    for key in FORWARDED {
        println!("cargo:rerun-if-env-changed={}", key);
        if let Ok(value) = std::env::var(key) {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
