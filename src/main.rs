//! Host-side helper: `cargo run` bundles the star show with wasm-pack into
//! `static/pkg` and serves `static/` on http://127.0.0.1:8000.

use std::process::{self, Command, ExitStatus, Stdio};

const SITE_DIR: &str = "static";
const PORT: &str = "8000";

fn run(program: &str, args: &[&str]) -> std::io::Result<ExitStatus> {
    Command::new(program).args(args).status()
}

fn main() {
    println!("Bundling star show with wasm-pack …");
    match run("wasm-pack", &["build", "--release", "--target", "web", "--out-dir", "static/pkg"]) {
        Ok(status) if status.success() => {}
        Ok(status) => {
            eprintln!("wasm-pack exited with {status}");
            process::exit(1);
        }
        Err(_) => {
            eprintln!(
                "wasm-pack not found in PATH (https://rustwasm.github.io/wasm-pack/); \
                 serving existing static/pkg if any."
            );
        }
    }

    println!(
        "Serving {SITE_DIR}/ at http://127.0.0.1:{PORT} \
         (append ?scheme=spiral to pick a start scheme)"
    );
    let server = Command::new("python3")
        .args(["-m", "http.server", PORT, "--directory", SITE_DIR])
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .spawn();

    match server.and_then(|mut child| child.wait()) {
        Ok(status) if status.success() => {}
        Ok(status) => {
            eprintln!("http server exited with {status}");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("failed to start http server: {err}");
            process::exit(1);
        }
    }
}
