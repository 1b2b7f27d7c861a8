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

//! Signatures: pairing-equation verification, distinct-message aggregation
//! and threshold recovery.

use alloc::{string::String, vec::Vec};
use core::ops::{Add, AddAssign};

use ark_ec::pairing::Pairing;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::{
	curve::Bn254,
	engine::{self, SignatureGroup, PUBLIC_KEY_GENERATOR},
	error::Error,
	hash::hash_to_g1,
	keys::{Id, PublicKey},
	poly::lagrange_interpolate,
};

/// `s*H(m)`, a point on the small curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Signature(pub(crate) SignatureGroup);

impl Signature {
	/// Check the pairing equation `e(Q, self) = e(pk, H(m))`.
	pub fn verify(&self, public_key: &PublicKey, message: &[u8]) -> bool {
		let hm = hash_to_g1(message);
		let lhs = Bn254::pairing(self.0, PUBLIC_KEY_GENERATOR);
		let rhs = Bn254::pairing(hm, public_key.0);
		lhs == rhs
	}

	/// Check a proof of possession: the signature must bind to the raw
	/// (uncompressed) encoding of the key it claims.
	pub fn verify_pop(&self, public_key: &PublicKey) -> bool {
		self.verify(public_key, &public_key.to_raw_bytes())
	}

	/// Verify an aggregate of pairwise-distinct messages against the signer
	/// list.
	///
	/// Each signer costs one Miller loop; the expensive final exponentiation
	/// runs once on the product. The signer set must be fixed before the
	/// keys are chosen (proofs of possession, or a registration deadline):
	/// with adaptively chosen keys this check is open to rogue-key
	/// aggregation, in which case [`Self::verify_aggregate_augmented`] is
	/// the one to call.
	pub fn verify_aggregate<M: AsRef<[u8]>>(
		&self,
		messages: &[M],
		public_keys: &[PublicKey],
	) -> bool {
		if messages.is_empty() || messages.len() != public_keys.len() {
			return false;
		}
		let lhs = Bn254::pairing(self.0, PUBLIC_KEY_GENERATOR);
		let hashes = messages.iter().map(|message| hash_to_g1(message.as_ref()));
		let product =
			Bn254::multi_miller_loop(hashes, public_keys.iter().map(|key| key.0));
		match Bn254::final_exponentiation(product) {
			Some(rhs) => lhs == rhs,
			None => false,
		}
	}

	/// Rogue-key-hardened aggregate verification.
	///
	/// Each message is checked with its signer's canonical public key
	/// encoding prefixed, so the signatures must have been produced with
	/// [`crate::SecretKey::sign_augmented`]. A key chosen as a function of
	/// the other participants' keys then no longer cancels out of the
	/// product.
	pub fn verify_aggregate_augmented<M: AsRef<[u8]>>(
		&self,
		messages: &[M],
		public_keys: &[PublicKey],
	) -> bool {
		if messages.is_empty() || messages.len() != public_keys.len() {
			return false;
		}
		let bound: Vec<Vec<u8>> = messages
			.iter()
			.zip(public_keys)
			.map(|(message, key)| {
				let mut bytes = key.to_bytes();
				bytes.extend_from_slice(message.as_ref());
				bytes
			})
			.collect();
		self.verify_aggregate(&bound, public_keys)
	}

	/// Recover the dealer's signature from any k distinct signature shares.
	pub fn recover(shares: &[Signature], ids: &[Id]) -> Result<Signature, Error> {
		let values: Vec<SignatureGroup> = shares.iter().map(|share| share.0).collect();
		lagrange_interpolate(&values, ids).map(Signature)
	}

	pub fn to_bytes(&self) -> Vec<u8> {
		engine::signature_point_to_bytes(&self.0)
	}

	pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
		SignatureGroup::deserialize_compressed(bytes)
			.map(Self)
			.map_err(|_| Error::InvalidEncoding)
	}

	pub fn to_hex(&self) -> String {
		engine::format_point(&self.0)
	}

	pub fn from_hex(text: &str) -> Result<Self, Error> {
		engine::parse_point(text).map(Self)
	}
}

impl Add for Signature {
	type Output = Signature;

	fn add(self, rhs: Signature) -> Signature {
		Signature(self.0 + rhs.0)
	}
}

impl AddAssign<&Signature> for Signature {
	fn add_assign(&mut self, rhs: &Signature) {
		self.0 += rhs.0;
	}
}
