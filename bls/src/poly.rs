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

//! The polynomial engine behind k-out-of-n sharing.
//!
//! Horner evaluation and Lagrange interpolation are generic over the value
//! space: scalar shares, signature shares (G1) and public key shares (G2)
//! all run through the same two routines, bounded only by scalar
//! multiplication and addition.

use alloc::vec::Vec;
use core::ops::{AddAssign, Mul};

use ark_ff::{Field, UniformRand, Zero};
use ark_std::rand::Rng;

use crate::{engine::Scalar, error::Error, keys::Id};

/// Evaluate `f(x) = c[0] + c[1]*x + ... + c[k-1]*x^(k-1)` by Horner's rule.
///
/// Refuses fewer than two coefficients: a constant polynomial shares
/// nothing.
pub(crate) fn eval_poly<C>(x: Scalar, coefficients: &[C]) -> Result<C, Error>
where
	C: Copy + AddAssign<C> + Mul<Scalar, Output = C>,
{
	if coefficients.len() < 2 {
		return Err(Error::BadSize);
	}
	let mut y = coefficients[coefficients.len() - 1];
	for c in coefficients.iter().rev().skip(1) {
		y = y * x;
		y += *c;
	}
	Ok(y)
}

/// Evaluate a share polynomial at a participant id.
///
/// f(0) is the dealer's secret, so the zero id is refused here before any
/// arithmetic happens.
pub(crate) fn eval_share<C>(id: &Id, coefficients: &[C]) -> Result<C, Error>
where
	C: Copy + AddAssign<C> + Mul<Scalar, Output = C>,
{
	if id.is_zero() {
		return Err(Error::ZeroId);
	}
	eval_poly(id.0, coefficients)
}

/// A dealer polynomial over the scalar field with `f(0) = secret`.
pub(crate) struct Polynomial {
	coefficients: Vec<Scalar>,
}

impl Polynomial {
	/// A fixed constant term under k - 1 uniformly random coefficients.
	pub(crate) fn generate<R: Rng>(
		secret: Scalar,
		k: usize,
		rng: &mut R,
	) -> Result<Self, Error> {
		if k < 2 {
			return Err(Error::BadThreshold);
		}
		let mut coefficients = Vec::with_capacity(k);
		coefficients.push(secret);
		for _ in 1..k {
			coefficients.push(Scalar::rand(rng));
		}
		Ok(Self { coefficients })
	}

	pub(crate) fn into_coefficients(self) -> Vec<Scalar> {
		self.coefficients
	}
}

/// Recover `f(0)` from k evaluations `{ (ids[i], values[i]) }`.
///
/// The coefficient of `values[i]` is `delta_i = a / b_i` with
/// `a = prod_j ids[j]` and `b_i = ids[i] * prod_{j != i} (ids[j] - ids[i])`,
/// which equals the standard Lagrange coefficient at x = 0.
pub(crate) fn lagrange_interpolate<C>(values: &[C], ids: &[Id]) -> Result<C, Error>
where
	C: Copy + Zero + AddAssign<C> + Mul<Scalar, Output = C>,
{
	let k = ids.len();
	if values.len() != k || k < 2 {
		return Err(Error::BadSize);
	}
	let mut a = ids[0].0;
	for id in &ids[1..] {
		a *= id.0;
	}
	let mut result = C::zero();
	for (i, value) in values.iter().enumerate() {
		let mut b = ids[i].0;
		for (j, id) in ids.iter().enumerate() {
			if j != i {
				let difference = id.0 - ids[i].0;
				if difference.is_zero() {
					return Err(Error::DuplicateId);
				}
				b *= difference;
			}
		}
		let delta = a * b.inverse().ok_or(Error::ZeroId)?;
		result += *value * delta;
	}
	Ok(result)
}

#[cfg(test)]
mod test {
	use super::*;
	use alloc::vec;
	use ark_std::test_rng;

	#[test]
	fn horner_matches_direct_evaluation() {
		// f(x) = 3 + 2x + 5x^2 at x = 7
		let coefficients =
			vec![Scalar::from(3u64), Scalar::from(2u64), Scalar::from(5u64)];
		let y = eval_poly(Scalar::from(7u64), &coefficients).unwrap();
		assert_eq!(y, Scalar::from(262u64));
	}

	#[test]
	fn degree_below_one_is_refused() {
		let coefficients = vec![Scalar::from(1u64)];
		assert_eq!(
			eval_poly(Scalar::from(1u64), &coefficients),
			Err(Error::BadSize)
		);
		assert_eq!(
			Polynomial::generate(Scalar::from(1u64), 1, &mut test_rng()).err(),
			Some(Error::BadThreshold)
		);
		assert_eq!(
			Polynomial::generate(Scalar::from(1u64), 0, &mut test_rng()).err(),
			Some(Error::BadThreshold)
		);
	}

	#[test]
	fn share_evaluation_refuses_the_zero_id() {
		let coefficients = vec![Scalar::from(1u64), Scalar::from(2u64)];
		assert_eq!(
			eval_share(&Id::from(0u64), &coefficients),
			Err(Error::ZeroId)
		);
	}

	#[test]
	fn interpolation_recovers_the_constant_term() {
		let mut rng = test_rng();
		let secret = Scalar::rand(&mut rng);
		let coefficients = Polynomial::generate(secret, 3, &mut rng)
			.unwrap()
			.into_coefficients();
		let ids = [Id::from(1u64), Id::from(2u64), Id::from(3u64)];
		let shares: Vec<Scalar> = ids
			.iter()
			.map(|id| eval_share(id, &coefficients).unwrap())
			.collect();
		assert_eq!(lagrange_interpolate(&shares, &ids).unwrap(), secret);
	}

	#[test]
	fn interpolation_is_generic_over_the_groups() {
		use crate::engine::{PublicKeyGroup, PUBLIC_KEY_GENERATOR};

		let mut rng = test_rng();
		let secret = Scalar::rand(&mut rng);
		let coefficients = Polynomial::generate(secret, 3, &mut rng)
			.unwrap()
			.into_coefficients();
		let ids = [Id::from(4u64), Id::from(9u64), Id::from(1u64)];
		let shares: Vec<PublicKeyGroup> = ids
			.iter()
			.map(|id| PUBLIC_KEY_GENERATOR * eval_share(id, &coefficients).unwrap())
			.collect();
		let recovered = lagrange_interpolate(&shares, &ids).unwrap();
		assert_eq!(recovered, PUBLIC_KEY_GENERATOR * secret);
	}

	#[test]
	fn interpolation_rejects_duplicates_and_mismatched_lengths() {
		let values =
			vec![Scalar::from(1u64), Scalar::from(2u64), Scalar::from(3u64)];
		let ids = [Id::from(1u64), Id::from(2u64), Id::from(1u64)];
		assert_eq!(
			lagrange_interpolate(&values, &ids),
			Err(Error::DuplicateId)
		);
		assert_eq!(
			lagrange_interpolate(&values, &ids[..2]),
			Err(Error::BadSize)
		);
		assert_eq!(
			lagrange_interpolate(&values[..1], &ids[..1]),
			Err(Error::BadSize)
		);
	}
}
