fn main() {
    // Use VERSION env var if set (from the release pipeline), otherwise fall back
    // to the Cargo.toml version. The version selects which wharfd release gets
    // fetched at install time, so the two must agree.
    let version =
        std::env::var("VERSION").unwrap_or_else(|_| std::env::var("CARGO_PKG_VERSION").unwrap());
    println!("cargo:rustc-env=CARGO_PKG_VERSION={}", version);
    println!("cargo:rerun-if-env-changed=VERSION");
}
