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

//! BLS signatures on the BN254 pairing with k-out-of-n threshold signing and
//! distinct-message aggregation.
//!
//! A secret scalar s yields the public key `sQ` on the large curve (G2) and
//! signs a message m as `s*H(m)` on the small curve (G1), where H is a
//! deterministic hash onto the curve. Verification checks the pairing
//! equation `e(Q, s*H(m)) = e(sQ, H(m))`.
//!
//! On top of the plain scheme this crate provides:
//!
//! * Shamir-style sharing: a dealer splits s into the coefficients of a
//!   random polynomial, hands each participant `f(id)`, and any k distinct
//!   shares recover the secret, the public key or a signature by Lagrange
//!   interpolation at zero, without the dealer ever coming back online.
//! * Aggregation: distinct-message signatures sum into one G1 point which is
//!   verified with one Miller loop per signer but a single final
//!   exponentiation.
//! * Proofs of possession, binding a public key to knowledge of its secret.

#![no_std]
#![warn(
	unused,
	future_incompatible,
	nonstandard_style,
	rust_2018_idioms,
	rust_2021_compatibility
)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod curve;
pub mod engine;
pub mod error;
pub mod hash;
pub mod keys;
pub mod poly;
pub mod sign;

pub use error::Error;
pub use keys::{master_public_key, proofs_of_possession, Id, PublicKey, SecretKey};
pub use sign::Signature;
