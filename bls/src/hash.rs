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

//! Hashing messages onto the signature curve.
//!
//! `H(m)` is computed in three fixed stages: a SHA-256 digest, a mask-load
//! of the digest into the base field (high bits cleared, never reduced), and
//! the Shallue-van de Woestijne encoding onto `y^2 = x^3 + 2`. The pipeline
//! is packaged behind the curve layer's [`HashToCurve`] boundary; the
//! signature curve has cofactor one, so the image already lies in the
//! prime-order group.

use alloc::vec::Vec;

use ark_ec::{
	hashing::{HashToCurve, HashToCurveError},
	AffineRepr,
};
use ark_ff::{BigInteger, Field, MontFp, One, PrimeField, Zero};
use sha2::{Digest, Sha256};

use crate::{
	curve::{Fq, G1Affine},
	engine::SignatureGroup,
};

/// sha256 hasher
pub fn sha256(b: &[u8]) -> Vec<u8> {
	let mut hasher = Sha256::new();
	hasher.update(b);
	hasher.finalize().to_vec()
}

/// The curve coefficient b of the signature curve.
const CURVE_B: Fq = MontFp!("2");

/// sqrt(-3) in the base field.
const SQRT_NEG_3: Fq =
	MontFp!("16798108731015832281326531451663778978262632916709829269670106367266327101444");

/// (sqrt(-3) - 1) / 2 in the base field.
const SW_X_OFFSET: Fq =
	MontFp!("16798108731015832283133667796947756444075910019074449559301910896669540483083");

/// Mask-load little-endian bytes into a prime field element.
///
/// Bits at and above the modulus bit length are cleared, and one further bit
/// is dropped if the value still is not below the modulus. The low bits pass
/// through untouched; this is a masking, not a modular reduction.
pub(crate) fn field_from_bytes_mask<F: PrimeField>(bytes: &[u8]) -> F {
	let mut bits: Vec<bool> = bytes
		.iter()
		.flat_map(|byte| {
			let byte = *byte;
			(0..8).map(move |i| (byte >> i) & 1 == 1)
		})
		.collect();
	bits.truncate(F::MODULUS_BIT_SIZE as usize);
	loop {
		let raw = F::BigInt::from_bits_le(&bits);
		if raw < F::MODULUS {
			return F::from_bigint(raw).expect("masked value is below the modulus");
		}
		bits.pop();
	}
}

fn is_negative(value: &Fq) -> bool {
	value.into_bigint() > Fq::MODULUS_MINUS_ONE_DIV_TWO
}

/// The Shallue-van de Woestijne encoding of a base field element onto the
/// signature curve.
///
/// Of the three candidate abscissae at least one always carries a square,
/// and the sign of y follows the sign of t, so the encoding is
/// deterministic. Zero and the two roots of `t^2 = -3` leave the formulas
/// undefined; such inputs step to the next field element to keep the map
/// total.
fn map_to_curve(t: Fq) -> G1Affine {
	let mut t = t;
	let mut denominator = Fq::one() + CURVE_B + t.square();
	while t.is_zero() || denominator.is_zero() {
		t += Fq::one();
		denominator = Fq::one() + CURVE_B + t.square();
	}
	let w = SQRT_NEG_3 * t * denominator.inverse().expect("denominator is non-zero");
	let x1 = SW_X_OFFSET - t * w;
	let x2 = -Fq::one() - x1;
	let w_inverse = w.inverse().expect("w is non-zero for non-zero t");
	let x3 = Fq::one() + w_inverse.square();

	let candidate = |x: Fq| x * x * x + CURVE_B;
	let (x, mut y) = if let Some(y) = candidate(x1).sqrt() {
		(x1, y)
	} else if let Some(y) = candidate(x2).sqrt() {
		(x2, y)
	} else {
		let y = candidate(x3)
			.sqrt()
			.expect("one of the three candidates is a square");
		(x3, y)
	};
	if is_negative(&t) != is_negative(&y) {
		y = -y;
	}
	let point = G1Affine::new_unchecked(x, y);
	debug_assert!(point.is_on_curve());
	point
}

/// The three-stage hasher onto the signature curve, behind the curve
/// layer's [`HashToCurve`] interface.
///
/// The generic [`MapToCurveBasedHasher`] composition is deliberately not
/// used here: it derives two independent field elements per message through
/// an expand-message field hasher and adds the two mapped points, while this
/// scheme fixes `H(m)` to a single masked SHA-256 digest sent through the
/// encoding once. The two constructions disagree on every input.
///
/// [`MapToCurveBasedHasher`]: ark_ec::hashing::map_to_curve_hasher::MapToCurveBasedHasher
pub struct SvdwHasher;

impl HashToCurve<SignatureGroup> for SvdwHasher {
	fn new(_domain: &[u8]) -> Result<Self, HashToCurveError> {
		// the pipeline is fully fixed; there is no domain separation
		Ok(SvdwHasher)
	}

	fn hash(&self, message: &[u8]) -> Result<G1Affine, HashToCurveError> {
		let digest = sha256(message);
		Ok(map_to_curve(field_from_bytes_mask::<Fq>(&digest)))
	}
}

/// getter function for the hash to curve map
pub fn hash_to_curve_map() -> SvdwHasher {
	SvdwHasher
}

/// Hash an arbitrary byte string onto the signature group.
pub fn hash_to_g1(message: &[u8]) -> SignatureGroup {
	hash_to_curve_map()
		.hash(message)
		.expect("the masked-digest pipeline is total")
		.into_group()
}

#[cfg(test)]
mod test {
	use super::*;
	use alloc::vec;
	use ark_ff::BigInt;

	#[test]
	fn can_calc_sha256() {
		let actual = sha256(b"test");
		let expected = vec![
			159, 134, 208, 129, 136, 76, 125, 101, 154, 47, 234, 160, 197, 90, 208, 21, 163, 191,
			79, 27, 43, 11, 130, 44, 209, 93, 108, 21, 176, 240, 10, 8,
		];
		assert_eq!(actual, expected);
	}

	#[test]
	fn mask_load_clears_the_high_bits() {
		// 2^254 - 1 exceeds the modulus, so one more bit is dropped and the
		// result is exactly 2^253 - 1.
		let loaded = field_from_bytes_mask::<Fq>(&[0xff; 32]);
		let expected = Fq::from_bigint(BigInt::new([
			u64::MAX,
			u64::MAX,
			u64::MAX,
			0x1fff_ffff_ffff_ffff,
		]))
		.unwrap();
		assert_eq!(loaded, expected);
	}

	#[test]
	fn mask_load_passes_low_bits_through() {
		let mut bytes = [0u8; 32];
		bytes[0] = 42;
		assert_eq!(field_from_bytes_mask::<Fq>(&bytes), Fq::from(42u64));
	}

	#[test]
	fn hash_lands_on_the_curve() {
		use ark_ec::CurveGroup;
		let point = hash_to_g1(b"hello0").into_affine();
		assert!(point.is_on_curve());
		assert!(!point.is_zero());
	}

	#[test]
	fn hash_is_deterministic_and_message_sensitive() {
		assert_eq!(hash_to_g1(b"abc"), hash_to_g1(b"abc"));
		assert_ne!(hash_to_g1(b"abc"), hash_to_g1(b"abd"));
		assert_ne!(hash_to_g1(b""), hash_to_g1(b"abc"));
	}

	#[test]
	fn map_handles_the_degenerate_inputs() {
		// t = 0 steps to t = 1 instead of being rejected
		assert_eq!(map_to_curve(Fq::zero()), map_to_curve(Fq::one()));
		// the two roots of t^2 = -3 annihilate the denominator
		assert!(map_to_curve(SQRT_NEG_3).is_on_curve());
		assert!(map_to_curve(-SQRT_NEG_3).is_on_curve());
	}
}
