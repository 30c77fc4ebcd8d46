/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

/// Failure conditions of the crate.  Looking up a missing key is not one of them: lookups
/// return `None`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("bucket count must be positive, got {bucket_count}")]
    InvalidBucketCount { bucket_count: usize },

    #[error("list of size {len} accessed with index {index}")]
    IndexOutOfBounds { index: usize, len: usize },
}
