// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use pg_core::OptionValue;
use serial_test::serial;

#[test]
#[serial]
fn format_option_pads_flag_and_lists_values() {
    std::env::set_var("NO_COLOR", "1");
    let option = CompileOption::new(
        "--opt",
        vec![OptionValue::from(0i64), OptionValue::from(2i64)],
        OptionValue::from(0i64),
    );
    assert_eq!(format_option(&option, 8), "--opt     0|2  (default: 0)");
    std::env::remove_var("NO_COLOR");
}
