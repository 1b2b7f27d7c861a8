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

//! The 254-bit Barreto-Naehrig curve the scheme is fixed to, instantiated
//! through the curve layer's generic BN machinery.
//!
//! The curve is generated by the parameter z = -(2^62 + 2^55 + 1):
//! p = 36z^4 + 36z^3 + 24z^2 + 6z + 1 and the group order
//! r = 36z^4 + 36z^3 + 18z^2 + 6z + 1, with `y^2 = x^3 + 2` over Fq and the
//! sextic D-twist over Fq2 carrying the public key group. Miller loop and
//! final exponentiation come from the layer; this module only supplies the
//! constants.

pub mod fields;
pub mod g1;
pub mod g2;

use ark_ec::bn::{Bn, BnConfig, TwistType};
use ark_ff::MontFp;

pub use self::fields::{Fq, Fq12, Fq2, Fq6, Fr};
pub use self::g1::{G1Affine, G1Projective};
pub use self::g2::{G2Affine, G2Projective};

use self::fields::{Fq12Config, Fq2Config, Fq6Config};

pub struct Config;

impl BnConfig for Config {
	/// |z| = 2^62 + 2^55 + 1
	const X: &'static [u64] = &[0x4080000000000001];
	const X_IS_NEGATIVE: bool = true;

	/// |6z + 2| = 2^65 + 2^63 + 2^58 + 2^56 + 2^2, in signed binary form,
	/// least significant digit first.
	const ATE_LOOP_COUNT: &'static [i8] = &[
		0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
		0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0,
		1, 0, 0, 0, 0, -1, 0, 1,
	];

	const TWIST_TYPE: TwistType = TwistType::D;

	/// (u + 1)^((p - 1)/3)
	const TWIST_MUL_BY_Q_X: Fq2 = Fq2::new(
		MontFp!("0"),
		MontFp!("16798108731015832283133667796947756444075910019074449559301910896669540483083"),
	);

	/// (u + 1)^((p - 1)/2)
	const TWIST_MUL_BY_Q_Y: Fq2 = Fq2::new(
		MontFp!("16226349498735898878582721725794281106152147739300925444201528929117996286405"),
		MontFp!("16226349498735898878582721725794281106152147739300925444201528929117996286405"),
	);

	type Fp = Fq;
	type Fp2Config = Fq2Config;
	type Fp6Config = Fq6Config;
	type Fp12Config = Fq12Config;
	type G1Config = g1::Config;
	type G2Config = g2::Config;
}

/// The pairing engine over the curve.
pub type Bn254 = Bn<Config>;
