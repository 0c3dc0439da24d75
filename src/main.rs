// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The blastp-runner authors

use blastp_runner::errors::RunnerError;

fn main() -> Result<(), RunnerError> {
    blastp_runner::run()
}
