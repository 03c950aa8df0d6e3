/// 単語列の差分セグメント
///
/// 2つの単語列 A / B の差分を表す。インデックスはいずれも
/// 元の列に対する位置で、セグメントは位置順に並ぶ。
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffOp {
    /// 両方の列に存在する区間
    ///
    /// A の `a_start..a_start+len` と B の `b_start..b_start+len` が
    /// 1対1で対応する。
    Equal {
        a_start: usize,
        b_start: usize,
        len: usize,
    },

    /// A 側にのみ存在する区間
    Delete { a_start: usize, len: usize },

    /// B 側にのみ存在する区間
    Insert { b_start: usize, len: usize },
}

/// 単語レベルの差分を計算する
///
/// 最長共通部分列（LCS）に基づく標準的な差分アルゴリズム。
/// 動的計画法でLCS長テーブルを構築し、バックトラックで
/// セグメント列を復元する。
///
/// 対象は高々数千語のチャプター単位の列なので、
/// O(n*m) のテーブルで十分実用になる。
///
/// どちらかの列が空の場合は、もう一方の全体が
/// Delete / Insert 1セグメントになる（空同士なら空）。
///
/// # Examples
///
/// ```
/// # use memo_align::diff::{diff_words, DiffOp};
/// let a = ["hello", "there", "world"];
/// let b = ["hello", "world"];
/// let ops = diff_words(&a, &b);
/// assert_eq!(ops[0], DiffOp::Equal { a_start: 0, b_start: 0, len: 1 });
/// assert_eq!(ops[1], DiffOp::Delete { a_start: 1, len: 1 });
/// assert_eq!(ops[2], DiffOp::Equal { a_start: 2, b_start: 1, len: 1 });
/// ```
pub fn diff_words<S: AsRef<str>>(a: &[S], b: &[S]) -> Vec<DiffOp> {
    let n = a.len();
    let m = b.len();

    if n == 0 && m == 0 {
        return Vec::new();
    }
    if n == 0 {
        return vec![DiffOp::Insert { b_start: 0, len: m }];
    }
    if m == 0 {
        return vec![DiffOp::Delete { a_start: 0, len: n }];
    }

    // LCS長テーブル: table[i*(m+1)+j] = a[i..] と b[j..] のLCS長
    let width = m + 1;
    let mut table = vec![0u32; (n + 1) * width];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            table[i * width + j] = if a[i].as_ref() == b[j].as_ref() {
                table[(i + 1) * width + j + 1] + 1
            } else {
                table[(i + 1) * width + j].max(table[i * width + j + 1])
            };
        }
    }

    // バックトラックしてセグメント列を構築
    let mut ops = Vec::new();
    let mut i = 0;
    let mut j = 0;
    while i < n && j < m {
        if a[i].as_ref() == b[j].as_ref() {
            let (a_start, b_start) = (i, j);
            while i < n && j < m && a[i].as_ref() == b[j].as_ref() {
                i += 1;
                j += 1;
            }
            ops.push(DiffOp::Equal {
                a_start,
                b_start,
                len: i - a_start,
            });
        } else if table[(i + 1) * width + j] >= table[i * width + j + 1] {
            let a_start = i;
            while i < n
                && a[i].as_ref() != b[j].as_ref()
                && table[(i + 1) * width + j] >= table[i * width + j + 1]
            {
                i += 1;
            }
            ops.push(DiffOp::Delete {
                a_start,
                len: i - a_start,
            });
        } else {
            let b_start = j;
            while j < m
                && a[i].as_ref() != b[j].as_ref()
                && table[(i + 1) * width + j] < table[i * width + j + 1]
            {
                j += 1;
            }
            ops.push(DiffOp::Insert {
                b_start,
                len: j - b_start,
            });
        }
    }
    if i < n {
        ops.push(DiffOp::Delete {
            a_start: i,
            len: n - i,
        });
    }
    if j < m {
        ops.push(DiffOp::Insert {
            b_start: j,
            len: m - j,
        });
    }

    ops
}
