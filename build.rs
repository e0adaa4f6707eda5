fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Mail credentials are read with option_env!, so rebuild when they change
    for key in ["EMAILJS_SERVICE_ID", "EMAILJS_TEMPLATE_ID", "EMAILJS_PUBLIC_KEY"] {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
