/*! Integration tests for the optional value container.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * - construction: zero form, constructors and queries
 * - extraction: get, must_get, fallbacks and slice views
 * - transform: map, map2 and unpack
 * - serialization: JSON encoding of values and of records that embed them
 * - iteration: single-element iteration protocol
 * - errors: crate-level error classification
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("optional=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod construction;
mod errors;
mod iteration;
