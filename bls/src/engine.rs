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

//! The curve instantiation consumed by the rest of the crate.
//!
//! Public keys live on the large curve (G2) and signatures on the small one
//! (G1). Verifiers hash onto the small curve and aggregators add small
//! points, so the transposed orientation keeps the hot paths cheap while the
//! wide public keys are written once and cached.
//!
//! Everything below is fixed by the curve choice: the generator of the
//! public key group, the encoding sizes, and the `0x`-prefixed hex framing
//! of the text form.

use alloc::{format, string::String, vec, vec::Vec};

use ark_ec::CurveGroup;
use ark_ff::{BigInteger, PrimeField};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::{
	curve::{
		g2::{G2_GENERATOR_X, G2_GENERATOR_Y},
		Fr, G1Projective, G2Affine, G2Projective,
	},
	error::Error,
};

/// Group where public keys live: `pk = s*Q`.
pub type PublicKeyGroup = G2Projective;

/// Group where signatures live: `sig = s*H(m)`.
pub type SignatureGroup = G1Projective;

/// The scalar field shared by both groups; secret keys and share ids are
/// elements of it.
pub type Scalar = Fr;

/// Compressed canonical size of a scalar.
pub const SECRET_KEY_SERIALIZED_SIZE: usize = 32;
/// Compressed canonical size of a signature-group point.
pub const SIGNATURE_SERIALIZED_SIZE: usize = 32;
/// Compressed canonical size of a public-key-group point.
pub const PUBLIC_KEY_SERIALIZED_SIZE: usize = 64;
/// Uncompressed (raw array) size of a public-key-group point.
pub const PUBLIC_KEY_UNCOMPRESSED_SIZE: usize = 128;

/// The system-wide generator Q of the public key group.
///
/// Every public key is `s*Q`; all verifiers must agree on this point, so it
/// is pinned by the literal coordinates spelled out in the curve module
/// rather than derived from anything.
pub const PUBLIC_KEY_GENERATOR: G2Affine = G2Affine::new_unchecked(G2_GENERATOR_X, G2_GENERATOR_Y);

/// Compressed canonical bytes of a signature-group point.
pub(crate) fn signature_point_to_bytes(point: &SignatureGroup) -> Vec<u8> {
	let mut bytes = vec![0u8; SIGNATURE_SERIALIZED_SIZE];
	point
		.into_affine()
		.serialize_compressed(&mut bytes[..])
		.expect("buffer length equals the compressed size");
	bytes
}

/// Compressed canonical bytes of a public-key-group point.
pub(crate) fn public_key_point_to_bytes(point: &PublicKeyGroup) -> Vec<u8> {
	let mut bytes = vec![0u8; PUBLIC_KEY_SERIALIZED_SIZE];
	point
		.into_affine()
		.serialize_compressed(&mut bytes[..])
		.expect("buffer length equals the compressed size");
	bytes
}

/// Raw (uncompressed) bytes of a public-key-group point.
///
/// Used in exactly one place: the message a proof of possession signs.
/// Changing this encoding breaks every previously issued proof.
pub(crate) fn public_key_point_to_raw_bytes(point: &PublicKeyGroup) -> Vec<u8> {
	let mut bytes = vec![0u8; PUBLIC_KEY_UNCOMPRESSED_SIZE];
	point
		.into_affine()
		.serialize_uncompressed(&mut bytes[..])
		.expect("buffer length equals the uncompressed size");
	bytes
}

/// Text form of a point: `0x` followed by the compressed canonical encoding.
pub(crate) fn format_point<P: CanonicalSerialize>(point: &P) -> String {
	let mut bytes = Vec::new();
	point
		.serialize_compressed(&mut bytes)
		.expect("serialization into a vector cannot fail");
	array_bytes::bytes2hex("0x", &bytes)
}

/// Parse a `0x`-prefixed compressed point, validating curve and subgroup
/// membership.
pub(crate) fn parse_point<P: CanonicalDeserialize>(text: &str) -> Result<P, Error> {
	let digits = text.strip_prefix("0x").ok_or(Error::InvalidHex)?;
	let bytes = array_bytes::hex2bytes(digits).map_err(|_| Error::InvalidHex)?;
	P::deserialize_compressed(&bytes[..]).map_err(|_| Error::InvalidEncoding)
}

/// Text form of a scalar: `0x` followed by the big-endian integer digits
/// with leading zeros trimmed, the integer hex convention of the curve
/// layer.
pub(crate) fn format_scalar(value: &Scalar) -> String {
	let bytes = value.into_bigint().to_bytes_be();
	let digits = array_bytes::bytes2hex("", &bytes);
	let digits = digits.trim_start_matches('0');
	if digits.is_empty() {
		String::from("0x0")
	} else {
		format!("0x{digits}")
	}
}

/// Parse a `0x`-prefixed big-endian integer scalar. Odd-length digit strings
/// are accepted, matching the unpadded output of [`format_scalar`].
pub(crate) fn parse_scalar(text: &str) -> Result<Scalar, Error> {
	let digits = text.strip_prefix("0x").ok_or(Error::InvalidHex)?;
	let padded = if digits.len() % 2 == 0 {
		String::from(digits)
	} else {
		format!("0{digits}")
	};
	let bytes = array_bytes::hex2bytes(padded.as_str()).map_err(|_| Error::InvalidHex)?;
	if bytes.len() > SECRET_KEY_SERIALIZED_SIZE {
		return Err(Error::InvalidEncoding);
	}
	Ok(Scalar::from_be_bytes_mod_order(&bytes))
}

#[cfg(test)]
mod test {
	use super::*;
	use ark_ec::AffineRepr;
	use ark_ff::UniformRand;
	use ark_std::test_rng;

	#[test]
	fn generator_matches_the_curve_layer() {
		assert!(PUBLIC_KEY_GENERATOR.is_on_curve());
		assert!(PUBLIC_KEY_GENERATOR.is_in_correct_subgroup_assuming_on_curve());
		assert_eq!(PUBLIC_KEY_GENERATOR, G2Affine::generator());
	}

	#[test]
	fn serialized_sizes_match_the_constants() {
		let mut rng = test_rng();
		let signature = SignatureGroup::rand(&mut rng);
		let public_key = PublicKeyGroup::rand(&mut rng);
		assert_eq!(signature_point_to_bytes(&signature).len(), SIGNATURE_SERIALIZED_SIZE);
		assert_eq!(public_key_point_to_bytes(&public_key).len(), PUBLIC_KEY_SERIALIZED_SIZE);
		assert_eq!(
			public_key_point_to_raw_bytes(&public_key).len(),
			PUBLIC_KEY_UNCOMPRESSED_SIZE
		);
		assert_eq!(Scalar::rand(&mut rng).compressed_size(), SECRET_KEY_SERIALIZED_SIZE);
	}

	#[test]
	fn raw_form_round_trips() {
		let mut rng = test_rng();
		let public_key = PublicKeyGroup::rand(&mut rng);
		let raw = public_key_point_to_raw_bytes(&public_key);
		assert_eq!(
			PublicKeyGroup::deserialize_uncompressed(&raw[..]).unwrap(),
			public_key
		);
	}

	#[test]
	fn point_text_form_round_trips() {
		let mut rng = test_rng();
		let point = PublicKeyGroup::rand(&mut rng);
		let text = format_point(&point);
		assert!(text.starts_with("0x"));
		assert_eq!(parse_point::<PublicKeyGroup>(&text).unwrap(), point);
	}

	#[test]
	fn scalar_text_form_round_trips() {
		let mut rng = test_rng();
		let value = Scalar::rand(&mut rng);
		assert_eq!(parse_scalar(&format_scalar(&value)).unwrap(), value);

		assert_eq!(format_scalar(&Scalar::from(0u64)), "0x0");
		assert_eq!(parse_scalar("0x0").unwrap(), Scalar::from(0u64));
		// odd digit counts parse
		assert_eq!(parse_scalar("0x123").unwrap(), Scalar::from(0x123u64));
	}

	#[test]
	fn malformed_text_is_rejected() {
		assert_eq!(parse_scalar("123").err(), Some(Error::InvalidHex));
		assert_eq!(parse_scalar("0xzz").err(), Some(Error::InvalidHex));
		assert_eq!(parse_point::<SignatureGroup>("deadbeef").err(), Some(Error::InvalidHex));
		assert_eq!(
			parse_point::<SignatureGroup>("0xdeadbeef").err(),
			Some(Error::InvalidEncoding)
		);
	}
}
