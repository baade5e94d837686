// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

mod matcher_tests;
mod parse_tests;
