// The wasm build starts through `hrms_frontend::start`; this binary exists so
// `trunk serve` has a target to build.
fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("hrms-frontend runs in the browser; build it with `trunk build`.");
}
