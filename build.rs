use chrono::Datelike;

fn main() {
    // Year shown in the footer, fixed at build time
    let year = chrono::Utc::now().year();
    println!("cargo:rustc-env=BUILD_YEAR={}", year);

    // Email provider identifiers are read with option_env!
    for var in [
        "EMAILJS_SERVICE_ID",
        "EMAILJS_TEMPLATE_ID",
        "EMAILJS_PUBLIC_KEY",
    ] {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
