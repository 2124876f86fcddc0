use chrono::Datelike;

fn main() {
    let now = chrono::Utc::now();

    // footer copyright
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    // Relay credentials are baked into the wasm bundle
    for key in [
        "EMAILJS_SERVICE_ID",
        "EMAILJS_TEMPLATE_ID",
        "EMAILJS_PUBLIC_KEY",
        "CONTACT_RECIPIENT",
    ] {
        println!("cargo:rerun-if-env-changed={key}");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
