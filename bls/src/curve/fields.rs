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

//! The field tower: Fq, Fr, and the quadratic/sextic/dodecic extensions the
//! pairing lands in.
//!
//! Fq2 = Fq[u]/(u^2 + 1), Fq6 = Fq2[v]/(v^3 - (u + 1)) and
//! Fq12 = Fq6[w]/(w^2 - v). The Frobenius coefficient tables are the powers
//! of the sextic non-residue u + 1 fixed by the tower.

use ark_ff::{
	fields::{Fp12, Fp12Config, Fp2, Fp2Config, Fp256, Fp6, Fp6Config, MontBackend, MontConfig},
	AdditiveGroup, Field, MontFp,
};

#[derive(MontConfig)]
#[modulus = "16798108731015832284940804142231733909889187121439069848933715426072753864723"]
#[generator = "2"]
pub struct FqConfig;
pub type Fq = Fp256<MontBackend<FqConfig, 4>>;

#[derive(MontConfig)]
#[modulus = "16798108731015832284940804142231733909759579603404752749028378864165570215949"]
#[generator = "2"]
pub struct FrConfig;
pub type Fr = Fp256<MontBackend<FrConfig, 4>>;

pub struct Fq2Config;
pub type Fq2 = Fp2<Fq2Config>;

impl Fp2Config for Fq2Config {
	type Fp = Fq;

	/// NONRESIDUE = -1
	const NONRESIDUE: Fq = MontFp!("-1");

	/// Coefficients of the Frobenius automorphism: (-1)^((p^i - 1)/2)
	const FROBENIUS_COEFF_FP2_C1: &'static [Fq] = &[Fq::ONE, MontFp!("-1")];
}

#[derive(Clone, Copy)]
pub struct Fq6Config;
pub type Fq6 = Fp6<Fq6Config>;

impl Fp6Config for Fq6Config {
	type Fp2Config = Fq2Config;

	/// NONRESIDUE = u + 1
	const NONRESIDUE: Fq2 = Fq2::new(MontFp!("1"), MontFp!("1"));

	/// (u + 1)^((p^i - 1)/3) for i = 0..6
	const FROBENIUS_COEFF_FP6_C1: &'static [Fq2] = &[
		Fq2::new(MontFp!("1"), MontFp!("0")),
		Fq2::new(
			MontFp!("0"),
			MontFp!("16798108731015832283133667796947756444075910019074449559301910896669540483083"),
		),
		Fq2::new(
			MontFp!("1807136345283977465813277102364620289631804529403213381639"),
			MontFp!("0"),
		),
		Fq2::new(MontFp!("0"), MontFp!("1")),
		Fq2::new(
			MontFp!("16798108731015832283133667796947756444075910019074449559301910896669540483083"),
			MontFp!("0"),
		),
		Fq2::new(
			MontFp!("0"),
			MontFp!("1807136345283977465813277102364620289631804529403213381639"),
		),
	];

	/// (u + 1)^((2 p^i - 2)/3) for i = 0..6
	const FROBENIUS_COEFF_FP6_C2: &'static [Fq2] = &[
		Fq2::new(MontFp!("1"), MontFp!("0")),
		Fq2::new(
			MontFp!("16798108731015832283133667796947756444075910019074449559301910896669540483084"),
			MontFp!("0"),
		),
		Fq2::new(
			MontFp!("16798108731015832283133667796947756444075910019074449559301910896669540483083"),
			MontFp!("0"),
		),
		Fq2::new(MontFp!("-1"), MontFp!("0")),
		Fq2::new(
			MontFp!("1807136345283977465813277102364620289631804529403213381639"),
			MontFp!("0"),
		),
		Fq2::new(
			MontFp!("1807136345283977465813277102364620289631804529403213381640"),
			MontFp!("0"),
		),
	];
}

#[derive(Clone, Copy)]
pub struct Fq12Config;
pub type Fq12 = Fp12<Fq12Config>;

impl Fp12Config for Fq12Config {
	type Fp6Config = Fq6Config;

	/// NONRESIDUE = v
	const NONRESIDUE: Fq6 = Fq6::new(Fq2::ZERO, Fq2::ONE, Fq2::ZERO);

	/// (u + 1)^((p^i - 1)/6) for i = 0..12
	const FROBENIUS_COEFF_FP12_C1: &'static [Fq2] = &[
		Fq2::new(MontFp!("1"), MontFp!("0")),
		Fq2::new(
			MontFp!("12310438583873020660552735091161044116898065562217439662059245424880585960937"),
			MontFp!("4487670147142811624388069051070689792991121559221630186874470001192167903786"),
		),
		Fq2::new(
			MontFp!("1807136345283977465813277102364620289631804529403213381640"),
			MontFp!("0"),
		),
		Fq2::new(
			MontFp!("571759232279933406358082416437452803737039382138144404732186496954757578318"),
			MontFp!("16226349498735898878582721725794281106152147739300925444201528929117996286405"),
		),
		Fq2::new(
			MontFp!("1807136345283977465813277102364620289631804529403213381639"),
			MontFp!("0"),
		),
		Fq2::new(
			MontFp!("5059429379422745030746151467508142596728160941359774591606656498146925482104"),
			MontFp!("11738679351593087254194652674723591313161026180079295257327058927925828382619"),
		),
		Fq2::new(MontFp!("-1"), MontFp!("0")),
		Fq2::new(
			MontFp!("4487670147142811624388069051070689792991121559221630186874470001192167903786"),
			MontFp!("12310438583873020660552735091161044116898065562217439662059245424880585960937"),
		),
		Fq2::new(
			MontFp!("16798108731015832283133667796947756444075910019074449559301910896669540483083"),
			MontFp!("0"),
		),
		Fq2::new(
			MontFp!("16226349498735898878582721725794281106152147739300925444201528929117996286405"),
			MontFp!("571759232279933406358082416437452803737039382138144404732186496954757578318"),
		),
		Fq2::new(
			MontFp!("16798108731015832283133667796947756444075910019074449559301910896669540483084"),
			MontFp!("0"),
		),
		Fq2::new(
			MontFp!("11738679351593087254194652674723591313161026180079295257327058927925828382619"),
			MontFp!("5059429379422745030746151467508142596728160941359774591606656498146925482104"),
		),
	];
}
