/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits

*/

mod word_store;
pub use word_store::*;

mod rice;
pub use rice::*;

mod fenwick;
pub use fenwick::*;
