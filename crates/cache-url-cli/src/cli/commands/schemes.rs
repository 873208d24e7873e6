//! `cache-url schemes` – list the scheme registry.

use cache_url::Scheme;

pub fn run_schemes() {
    println!("{:<15} {:<14} {}", "SCHEME", "FAMILY", "BACKEND");
    for scheme in Scheme::ALL {
        println!(
            "{:<15} {:<14} {}",
            scheme.token(),
            format!("{:?}", scheme.family()).to_lowercase(),
            scheme.backend()
        );
    }
}
