use std::env;

fn main() {
    // 发布构建时可通过 XCKIT_VERSION 注入版本号
    println!("cargo:rerun-if-env-changed=XCKIT_VERSION");

    match env::var("XCKIT_VERSION") {
        Ok(version) if !version.trim().is_empty() => {
            println!("cargo:rustc-env=XCKIT_VERSION={}", version.trim());
        }
        _ => {
            // 未指定时回退到 Cargo.toml 版本
            println!(
                "cargo:rustc-env=XCKIT_VERSION={}",
                env!("CARGO_PKG_VERSION")
            );
        }
    }
}
