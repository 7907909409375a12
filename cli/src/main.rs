// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! timeframe - parse, inspect and compare date intervals

use std::error::Error;

use timeframe_cli::run;

fn main() -> Result<(), Box<dyn Error>> {
    run()
}
