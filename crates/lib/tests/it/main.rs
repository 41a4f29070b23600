/*! Integration tests for shapekit.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - value: Tests for the Value type, its JSON shape and paths
 * - transform: Tests for the transform engine, organized by submodule
 * - text: Tests for the text helpers
 * - storage: Tests for the key-value storage facade
 * - timing: Tests for sleep, retry and poll-until
 * - notify: Tests for the notification manager
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("shapekit=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod helpers;
mod storage;
mod transform;
