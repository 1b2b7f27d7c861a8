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

//! The sextic D-twist `y^2 = x^3 + 2/(u + 1)` over Fq2 hosting the public
//! key group.
//!
//! The generator below is the system-wide point Q that every public key is
//! a multiple of. Interoperating implementations must agree on these exact
//! coordinates, so they are spelled out rather than derived.

use ark_ec::{
	models::CurveConfig,
	short_weierstrass::{self as sw, SWCurveConfig},
};
use ark_ff::{AdditiveGroup, MontFp};

use crate::curve::fields::{Fq, Fq2, Fr};

pub type G2Affine = sw::Affine<Config>;
pub type G2Projective = sw::Projective<Config>;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config;

impl CurveConfig for Config {
	type BaseField = Fq2;
	type ScalarField = Fr;

	/// COFACTOR = 2p - r =
	/// 16798108731015832284940804142231733910018794639473386948839051987979937513497
	const COFACTOR: &'static [u64] = &[
		0xad00000000000019,
		0xc2a2800000000016,
		0xba344d8000000008,
		0x2523648240000001,
	];

	/// COFACTOR_INV = COFACTOR^{-1} mod r
	const COFACTOR_INV: Fr =
		MontFp!("8399054365507916140663265725831889489001708940320597534943659766172318957567");
}

impl SWCurveConfig for Config {
	/// COEFF_A = 0
	const COEFF_A: Fq2 = Fq2::ZERO;

	/// COEFF_B = 2/(u + 1) = 1 - u
	const COEFF_B: Fq2 = Fq2::new(MontFp!("1"), MontFp!("-1"));

	/// GENERATOR = (G2_GENERATOR_X, G2_GENERATOR_Y)
	const GENERATOR: G2Affine = G2Affine::new_unchecked(G2_GENERATOR_X, G2_GENERATOR_Y);
}

pub const G2_GENERATOR_X: Fq2 = Fq2::new(G2_GENERATOR_X_C0, G2_GENERATOR_X_C1);
pub const G2_GENERATOR_Y: Fq2 = Fq2::new(G2_GENERATOR_Y_C0, G2_GENERATOR_Y_C1);

pub const G2_GENERATOR_X_C0: Fq =
	MontFp!("12723517038133731887338407189719511622662176727675373276651903807414909099441");

pub const G2_GENERATOR_X_C1: Fq =
	MontFp!("4168783608814932154536427934509895782246573715297911553964171371032945126671");

pub const G2_GENERATOR_Y_C0: Fq =
	MontFp!("13891744915211034074451795021214165905772212241412891944830863846330766296736");

pub const G2_GENERATOR_Y_C1: Fq =
	MontFp!("7937318970632701341203597196594272556916396164729705624521405069090520231616");
