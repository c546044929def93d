// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

mod conversation_repository_test;
mod lead_cache_repository_test;
