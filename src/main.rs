/// Binary entrypoint for the `msglink` executable.
///
/// Keeps the binary thin; all business logic lives in the `msglink_lib` crate so
/// unit tests can import library functions directly.
fn main() {
    msglink_lib::run();
}
