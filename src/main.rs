#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod angle;
mod error;
mod head;
mod pattern;
mod site;
mod theme;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(test)]
mod testing;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This site is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
