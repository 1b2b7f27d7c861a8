/*
 * Copyright 2025 by Ideal Labs, LLC
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use core::fmt;

/// Contract violations raised by share derivation, recovery and parsing.
///
/// Verification never raises: `verify`, `verify_pop` and the aggregate
/// checks report rejection as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
	/// Mismatched vector lengths, or fewer than two entries where the
	/// sharing math needs at least two.
	BadSize,
	/// A threshold k below 2 does not define a sharing polynomial.
	BadThreshold,
	/// A share polynomial was about to be evaluated at zero, which would
	/// hand out the dealer's secret.
	ZeroId,
	/// The same id appeared twice during Lagrange interpolation.
	DuplicateId,
	/// A hex string could not be decoded.
	InvalidHex,
	/// Bytes did not decode to a valid scalar or group element.
	InvalidEncoding,
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::BadSize => write!(f, "bad size"),
			Error::BadThreshold => write!(f, "bad k"),
			Error::ZeroId => write!(f, "id is zero"),
			Error::DuplicateId => write!(f, "same id"),
			Error::InvalidHex => write!(f, "invalid hex"),
			Error::InvalidEncoding => write!(f, "invalid encoding"),
		}
	}
}
