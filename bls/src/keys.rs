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

//! Key material: participant ids, secret keys and public keys.
//!
//! All three are plain values over the curve layer's types. Randomness is
//! always drawn from a caller-supplied generator, so nothing in here holds
//! process-wide state.

use alloc::{string::String, vec, vec::Vec};
use core::ops::{Add, AddAssign};

use ark_ff::{UniformRand, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::rand::Rng;

use crate::{
	engine::{self, PublicKeyGroup, Scalar, PUBLIC_KEY_GENERATOR},
	error::Error,
	hash::{field_from_bytes_mask, hash_to_g1},
	poly::{eval_share, lagrange_interpolate, Polynomial},
	sign::Signature,
};

fn scalar_from_limbs(limbs: &[u64; 4]) -> Scalar {
	let mut bytes = [0u8; 32];
	for (chunk, limb) in bytes.chunks_exact_mut(8).zip(limbs) {
		chunk.copy_from_slice(&limb.to_le_bytes());
	}
	field_from_bytes_mask(&bytes)
}

/// A participant index for k-out-of-n sharing.
///
/// Share polynomials are evaluated at this point. The zero id is refused
/// everywhere shares are derived, since f(0) is the dealer's secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Id(pub(crate) Scalar);

impl Id {
	pub fn is_zero(&self) -> bool {
		self.0.is_zero()
	}

	/// Mask-load a 256-bit little-endian limb array. Bits at and above the
	/// scalar modulus bit length are cleared, never reduced.
	pub fn from_limbs(limbs: &[u64; 4]) -> Self {
		Self(scalar_from_limbs(limbs))
	}

	pub fn to_bytes(&self) -> Vec<u8> {
		let mut bytes = vec![0u8; engine::SECRET_KEY_SERIALIZED_SIZE];
		self.0
			.serialize_compressed(&mut bytes[..])
			.expect("buffer length equals the compressed size");
		bytes
	}

	pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
		Scalar::deserialize_compressed(bytes)
			.map(Self)
			.map_err(|_| Error::InvalidEncoding)
	}

	pub fn to_hex(&self) -> String {
		engine::format_scalar(&self.0)
	}

	pub fn from_hex(text: &str) -> Result<Self, Error> {
		engine::parse_scalar(text).map(Self)
	}
}

impl From<u64> for Id {
	fn from(id: u64) -> Self {
		Self(Scalar::from(id))
	}
}

/// The signing scalar s. The scalar is wiped when the key is dropped.
#[derive(Debug, Clone, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct SecretKey(pub(crate) Scalar);

impl SecretKey {
	/// Sample a fresh key from the caller's entropy source.
	pub fn random<R: Rng>(rng: &mut R) -> Self {
		Self(Scalar::rand(rng))
	}

	/// Mask-load a 256-bit little-endian limb array, as [`Id::from_limbs`].
	pub fn from_limbs(limbs: &[u64; 4]) -> Self {
		Self(scalar_from_limbs(limbs))
	}

	/// The corresponding public key `s*Q`.
	pub fn public_key(&self) -> PublicKey {
		PublicKey(PUBLIC_KEY_GENERATOR * self.0)
	}

	/// Sign a message: `s*H(m)`.
	pub fn sign(&self, message: &[u8]) -> Signature {
		Signature(hash_to_g1(message) * self.0)
	}

	/// Sign with the own public key bound into the hash. Partner operation
	/// of [`Signature::verify_aggregate_augmented`]: the binding closes the
	/// rogue-key gap of plain aggregation.
	pub fn sign_augmented(&self, message: &[u8]) -> Signature {
		let mut bound = self.public_key().to_bytes();
		bound.extend_from_slice(message);
		self.sign(&bound)
	}

	/// A proof of possession: the self-signature over the raw (uncompressed)
	/// encoding of the own public key.
	pub fn proof_of_possession(&self) -> Signature {
		self.sign(&self.public_key().to_raw_bytes())
	}

	/// Dealer setup for k-out-of-n sharing.
	///
	/// Returns the k coefficients of the share polynomial f, with this key
	/// as the constant term and the rest drawn from `rng`. Requires k >= 2.
	pub fn master_secret_key<R: Rng>(
		&self,
		k: usize,
		rng: &mut R,
	) -> Result<Vec<SecretKey>, Error> {
		let polynomial = Polynomial::generate(self.0, k, rng)?;
		Ok(polynomial.into_coefficients().into_iter().map(SecretKey).collect())
	}

	/// Derive the secret share for `id`: f(id). The id must be non-zero.
	pub fn from_master(msk: &[SecretKey], id: &Id) -> Result<SecretKey, Error> {
		let coefficients: Vec<Scalar> = msk.iter().map(|key| key.0).collect();
		eval_share(id, &coefficients).map(SecretKey)
	}

	/// Recover the dealer's secret from any k distinct shares.
	pub fn recover(shares: &[SecretKey], ids: &[Id]) -> Result<SecretKey, Error> {
		let values: Vec<Scalar> = shares.iter().map(|share| share.0).collect();
		lagrange_interpolate(&values, ids).map(SecretKey)
	}

	pub fn to_bytes(&self) -> Vec<u8> {
		let mut bytes = vec![0u8; engine::SECRET_KEY_SERIALIZED_SIZE];
		self.0
			.serialize_compressed(&mut bytes[..])
			.expect("buffer length equals the compressed size");
		bytes
	}

	pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
		Scalar::deserialize_compressed(bytes)
			.map(Self)
			.map_err(|_| Error::InvalidEncoding)
	}

	pub fn to_hex(&self) -> String {
		engine::format_scalar(&self.0)
	}

	pub fn from_hex(text: &str) -> Result<Self, Error> {
		engine::parse_scalar(text).map(Self)
	}
}

impl Add for SecretKey {
	type Output = SecretKey;

	fn add(self, rhs: SecretKey) -> SecretKey {
		SecretKey(self.0 + rhs.0)
	}
}

impl AddAssign<&SecretKey> for SecretKey {
	fn add_assign(&mut self, rhs: &SecretKey) {
		self.0 += rhs.0;
	}
}

impl Drop for SecretKey {
	fn drop(&mut self) {
		self.0 = Scalar::zero();
	}
}

/// `s*Q`, a point on the public key curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct PublicKey(pub(crate) PublicKeyGroup);

impl PublicKey {
	/// Derive the public share for `id` from the master public key:
	/// the G2-valued polynomial evaluated at the id.
	pub fn from_master(mpk: &[PublicKey], id: &Id) -> Result<PublicKey, Error> {
		let coefficients: Vec<PublicKeyGroup> = mpk.iter().map(|key| key.0).collect();
		eval_share(id, &coefficients).map(PublicKey)
	}

	/// Recover the dealer's public key from any k distinct public shares.
	pub fn recover(keys: &[PublicKey], ids: &[Id]) -> Result<PublicKey, Error> {
		let values: Vec<PublicKeyGroup> = keys.iter().map(|key| key.0).collect();
		lagrange_interpolate(&values, ids).map(PublicKey)
	}

	pub fn to_bytes(&self) -> Vec<u8> {
		engine::public_key_point_to_bytes(&self.0)
	}

	/// The raw (uncompressed) byte form. Proofs of possession bind to this
	/// encoding and to nothing else.
	pub fn to_raw_bytes(&self) -> Vec<u8> {
		engine::public_key_point_to_raw_bytes(&self.0)
	}

	pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
		PublicKeyGroup::deserialize_compressed(bytes)
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

impl Add for PublicKey {
	type Output = PublicKey;

	fn add(self, rhs: PublicKey) -> PublicKey {
		PublicKey(self.0 + rhs.0)
	}
}

impl AddAssign<&PublicKey> for PublicKey {
	fn add_assign(&mut self, rhs: &PublicKey) {
		self.0 += rhs.0;
	}
}

/// The master public key: the G2 image `msk[i]*Q` of each master secret
/// coefficient. Participants check their shares against it.
pub fn master_public_key(msk: &[SecretKey]) -> Vec<PublicKey> {
	msk.iter().map(SecretKey::public_key).collect()
}

/// One proof of possession per master secret coefficient.
pub fn proofs_of_possession(msk: &[SecretKey]) -> Vec<Signature> {
	msk.iter().map(SecretKey::proof_of_possession).collect()
}

#[cfg(test)]
mod test {
	use super::*;
	use ark_std::test_rng;
	use core::fmt::Debug;

	const FFF: u64 = u64::MAX;

	fn mask_table_holds<T, F>(construct: F)
	where
		T: PartialEq + Debug,
		F: Fn(&[u64; 4]) -> T,
	{
		let table = [
			(FFF, (1u64 << 61) - 1),
			(1u64 << 62, 0),
			((1u64 << 62) | (1u64 << 61), 1u64 << 61),
			((1u64 << 61) - 1, (1u64 << 61) - 1),
		];
		for (input, expected) in table {
			let loaded = construct(&[FFF, FFF, FFF, input]);
			let reference = construct(&[FFF, FFF, FFF, expected]);
			assert_eq!(loaded, reference);
		}
	}

	#[test]
	fn limb_loading_masks_the_high_bits() {
		mask_table_holds(Id::from_limbs);
		mask_table_holds(SecretKey::from_limbs);
	}

	#[test]
	fn id_text_form_is_unpadded_integer_hex() {
		let id = Id::from_limbs(&[1, 2, 3, 4]);
		assert_eq!(
			id.to_hex(),
			"0x4000000000000000300000000000000020000000000000001"
		);
		assert_eq!(Id::from_hex(&id.to_hex()).unwrap(), id);
		assert_eq!(Id::from_bytes(&id.to_bytes()).unwrap(), id);
	}

	#[test]
	fn ids_compare_by_value() {
		assert!(Id::from(0u64).is_zero());
		assert!(!Id::from(5u64).is_zero());
		assert_eq!(Id::from(5u64), Id::from(5u64));
		assert_ne!(Id::from(5u64), Id::from(6u64));
	}

	#[test]
	fn added_secrets_yield_added_public_keys() {
		let mut rng = test_rng();
		let a = SecretKey::random(&mut rng);
		let b = SecretKey::random(&mut rng);
		let summed = a.clone() + b.clone();
		assert_eq!(summed.public_key(), a.public_key() + b.public_key());
	}

	#[test]
	fn master_key_requires_a_threshold() {
		let mut rng = test_rng();
		let sec = SecretKey::random(&mut rng);
		assert_eq!(sec.master_secret_key(0, &mut rng).err(), Some(Error::BadThreshold));
		assert_eq!(sec.master_secret_key(1, &mut rng).err(), Some(Error::BadThreshold));

		let msk = sec.master_secret_key(3, &mut rng).unwrap();
		assert_eq!(msk.len(), 3);
		assert_eq!(msk[0], sec);
		assert_eq!(
			SecretKey::from_master(&msk, &Id::from(0u64)),
			Err(Error::ZeroId)
		);
	}

	#[test]
	fn shares_follow_the_public_polynomial() {
		let mut rng = test_rng();
		let sec = SecretKey::random(&mut rng);
		let msk = sec.master_secret_key(3, &mut rng).unwrap();
		let mpk = master_public_key(&msk);
		for id in [3u64, 5, 193, 22, 15] {
			let id = Id::from(id);
			let share = SecretKey::from_master(&msk, &id).unwrap();
			let public_share = PublicKey::from_master(&mpk, &id).unwrap();
			assert_eq!(share.public_key(), public_share);
		}
	}

	#[test]
	fn text_and_byte_forms_round_trip() {
		let mut rng = test_rng();
		let sec = SecretKey::random(&mut rng);
		assert_eq!(SecretKey::from_hex(&sec.to_hex()).unwrap(), sec);
		assert_eq!(SecretKey::from_bytes(&sec.to_bytes()).unwrap(), sec);

		let public = sec.public_key();
		assert_eq!(PublicKey::from_hex(&public.to_hex()).unwrap(), public);
		assert_eq!(PublicKey::from_bytes(&public.to_bytes()).unwrap(), public);
		assert_eq!(public.to_bytes().len(), engine::PUBLIC_KEY_SERIALIZED_SIZE);
	}
}
