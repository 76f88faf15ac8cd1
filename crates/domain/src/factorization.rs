//! # 素因数分解
//!
//! 試し割り（trial division）による素因数分解を提供する。
//!
//! ## アルゴリズム
//!
//! 候補の約数 `d` を 2 から始め、`d * d <= n` の間、`n` を `d` で割り切れる限り
//! 割り続けて `d` を結果に追加する。ループ終了後に残った `n` が 1 より大きければ、
//! それが最大の素因数となる。
//!
//! 計算量は O(√n)。篩やメモ化による高速化は行わない。
//! 上限チェックもしないため、大きな素数を与えると時間がかかる。
//!
//! ## 入力の扱い
//!
//! | 入力 | 結果 |
//! |------|------|
//! | `1` | 空の列 |
//! | `0` | `DomainError::Validation` |
//! | 負数 | `DomainError::Validation` |
//!
//! 0 と負数は試し割りで意味のある分解にならないため、
//! [`FactorizationTarget`] の生成時点で拒否する。
//!
//! ## 使用例
//!
//! ```rust
//! use api2_domain::factorization::{FactorizationTarget, factorize};
//!
//! let target = FactorizationTarget::new(360)?;
//! let result = factorize(target);
//! assert_eq!(result.number(), 360);
//! assert_eq!(result.factors(), &[2, 2, 2, 3, 3, 5]);
//! # Ok::<(), api2_domain::DomainError>(())
//! ```

use derive_more::Display;

use crate::DomainError;

/// 素因数分解の対象となる正の整数（値オブジェクト）
///
/// # 不変条件
///
/// - 1 以上
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{_0}")]
pub struct FactorizationTarget(u64);

impl FactorizationTarget {
    /// 指定した値から分解対象を作成する
    ///
    /// # エラー
    ///
    /// 値が 0 以下の場合は `DomainError::Validation` を返す。
    pub fn new(value: i64) -> Result<Self, DomainError> {
        match u64::try_from(value) {
            Ok(n) if n >= 1 => Ok(Self(n)),
            _ => Err(DomainError::Validation(format!(
                "素因数分解の対象は 1 以上の整数である必要があります: {value}"
            ))),
        }
    }

    /// 内部の u64 値を取得する
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for FactorizationTarget {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// 素因数分解の結果
///
/// `factors` は重複を含む素因数の昇順の列で、その積は `number` に等しい。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factorization {
    number:  u64,
    factors: Vec<u64>,
}

impl Factorization {
    /// 分解対象の整数
    pub fn number(&self) -> u64 {
        self.number
    }

    /// 素因数の列（昇順、重複あり）
    pub fn factors(&self) -> &[u64] {
        &self.factors
    }

    /// 素因数の列を取り出す
    pub fn into_factors(self) -> Vec<u64> {
        self.factors
    }
}

/// 試し割りで素因数分解する
///
/// `d * d <= n` はオーバーフローを避けるため `d <= n / d` として判定する。
/// 両者は整数の範囲で同値。
pub fn factorize(target: FactorizationTarget) -> Factorization {
    let number = target.as_u64();
    let mut remaining = number;
    let mut factors = Vec::new();
    let mut divisor: u64 = 2;

    while divisor <= remaining / divisor {
        while remaining % divisor == 0 {
            factors.push(divisor);
            remaining /= divisor;
        }
        divisor += 1;
    }

    if remaining > 1 {
        factors.push(remaining);
    }

    Factorization { number, factors }
}
