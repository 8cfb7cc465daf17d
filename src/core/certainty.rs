//! # Certainty Factor — Aritmética de Fatores de Certeza
//!
//! Implementação da **combinação positiva** de fatores de certeza (CF),
//! o modelo clássico de sistemas especialistas (MYCIN) para acumular
//! evidências independentes a favor de uma mesma hipótese.
//!
//! ## Regra de Combinação
//!
//! ```text
//! combine(cf_old, cf_new) = cf_new                         se cf_old ≤ 0
//!                         = cf_old + cf_new × (1 − cf_old)  caso contrário
//! ```
//!
//! Para duas ou mais evidências positivas a regra é **comutativa e
//! associativa** (no limite matemático): `1 − CF` é o produto de
//! `(1 − eᵢ)` sobre todas as evidências, independente da ordem. Na prática
//! a combinação é incremental, na ordem em que as evidências aparecem, e o
//! resultado difere apenas por erro de ponto flutuante.
//!
//! ## Arredondamento
//!
//! Os valores expostos ao usuário são arredondados para **4 casas decimais**
//! com arredondamento *half-up* sobre `valor × 10000`.
//!
//! ## Exemplo
//!
//! ```rust
//! use career_advisor::core::certainty::{combine, round4};
//!
//! let cf = combine(0.0, 0.72);      // primeira evidência: 0.72
//! let cf = combine(cf, 0.39);       // 0.72 + 0.39 × 0.28 = 0.8292
//! assert_eq!(round4(cf), 0.8292);
//! ```

/// Combina um CF acumulado com uma nova evidência positiva.
///
/// Definida apenas para evidências não-negativas. Valores acima de 1.0 não
/// são rejeitados: propagam aritmeticamente e podem levar o CF acima de 1.0
/// (cabe à camada de exibição limitar o valor).
pub fn combine(cf_old: f64, cf_new: f64) -> f64 {
    if cf_old <= 0.0 {
        cf_new
    } else {
        cf_old + cf_new * (1.0 - cf_old)
    }
}

/// Arredonda para 4 casas decimais (half-up sobre `valor × 10000`).
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0 + 0.5).floor() / 10_000.0
}

/// Combina uma sequência de evidências, na ordem dada, a partir de CF = 0.
pub fn combine_all<I>(evidences: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    evidences.into_iter().fold(0.0, combine)
}
