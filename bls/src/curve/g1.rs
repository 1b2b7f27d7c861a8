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

//! The small curve `y^2 = x^3 + 2` over Fq. Its group order is exactly r,
//! so every point already lies in the prime-order group.

use ark_ec::{
	models::CurveConfig,
	short_weierstrass::{self as sw, SWCurveConfig},
};
use ark_ff::{AdditiveGroup, Field, MontFp};

use crate::curve::fields::{Fq, Fr};

pub type G1Affine = sw::Affine<Config>;
pub type G1Projective = sw::Projective<Config>;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config;

impl CurveConfig for Config {
	type BaseField = Fq;
	type ScalarField = Fr;

	/// COFACTOR = 1
	const COFACTOR: &'static [u64] = &[0x1];

	/// COFACTOR_INV = 1
	const COFACTOR_INV: Fr = Fr::ONE;
}

impl SWCurveConfig for Config {
	/// COEFF_A = 0
	const COEFF_A: Fq = Fq::ZERO;

	/// COEFF_B = 2
	const COEFF_B: Fq = MontFp!("2");

	/// GENERATOR = (-1, 1)
	const GENERATOR: G1Affine = G1Affine::new_unchecked(G1_GENERATOR_X, G1_GENERATOR_Y);
}

/// G1_GENERATOR_X = -1
pub const G1_GENERATOR_X: Fq = MontFp!("-1");

/// G1_GENERATOR_Y = 1
pub const G1_GENERATOR_Y: Fq = MontFp!("1");
