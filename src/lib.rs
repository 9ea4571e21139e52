//! Test-only package hosting the workspace-level golden scenario tests.
