/// テキストトークン
///
/// トークナイザの出力単位。単語または句読点のテキスト片。
/// 元のテキストの文字を完全に保持する（この段階では正規化しない）。
///
/// `attached_to_previous` は、このトークンが直前のトークンと
/// 同じ空白区切りフラグメントに属していたことを表す。
/// 再結合時にスペースを入れるかどうかの判断に使用する。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextToken {
    /// トークンのテキスト
    pub text: String,

    /// 句読点トークンかどうか
    pub is_punctuation: bool,

    /// 直前のトークンと同一フラグメント由来かどうか
    ///
    /// true の場合、再結合時にスペースを挟まない
    pub attached_to_previous: bool,
}

/// テキストを単語・句読点トークンに分割する
///
/// 空白で分割した後、各フラグメントを以下のように分類する:
///
/// 1. 英数字を含まないフラグメント → 句読点トークン1個
/// 2. 英数字のみのフラグメント → 単語トークン1個
/// 3. 混在フラグメント → 最大3個のサブトークンに分割
///    （先頭の句読点、単語本体、末尾の句読点）
///
/// 単語本体の内部に残る句読点（アポストロフィ、ハイフンなど）は
/// 単語の一部として保持する（例: `don't` は単語トークン1個）。
///
/// 空入力は空のシーケンスを返す。どのような入力でもエラーにはならない。
///
/// # Examples
///
/// ```
/// # use memo_align::tokenizer::tokenize;
/// let tokens = tokenize("Hello, world!");
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, vec!["Hello", ",", "world", "!"]);
/// ```
pub fn tokenize(text: &str) -> Vec<TextToken> {
    let mut tokens = Vec::new();

    for fragment in text.split_whitespace() {
        let start_len = tokens.len();
        split_fragment(fragment, &mut tokens);

        // フラグメント先頭のトークンは前のフラグメントとは結合しない
        if let Some(first) = tokens.get_mut(start_len) {
            first.attached_to_previous = false;
        }
    }

    tokens
}

/// 1フラグメントをサブトークンに分割して追加する
fn split_fragment(fragment: &str, tokens: &mut Vec<TextToken>) {
    let chars: Vec<char> = fragment.chars().collect();

    let first_alnum = chars.iter().position(|c| c.is_alphanumeric());
    let last_alnum = chars.iter().rposition(|c| c.is_alphanumeric());

    let (first, last) = match (first_alnum, last_alnum) {
        (Some(f), Some(l)) => (f, l),
        // 英数字なし: フラグメント全体が句読点
        _ => {
            tokens.push(TextToken {
                text: fragment.to_string(),
                is_punctuation: true,
                attached_to_previous: true,
            });
            return;
        }
    };

    // 先頭の句読点
    if first > 0 {
        tokens.push(TextToken {
            text: chars[..first].iter().collect(),
            is_punctuation: true,
            attached_to_previous: true,
        });
    }

    // 単語本体（内部の句読点は保持する）
    tokens.push(TextToken {
        text: chars[first..=last].iter().collect(),
        is_punctuation: false,
        attached_to_previous: true,
    });

    // 末尾の句読点
    if last + 1 < chars.len() {
        tokens.push(TextToken {
            text: chars[last + 1..].iter().collect(),
            is_punctuation: true,
            attached_to_previous: true,
        });
    }
}

/// トークン列を元のテキストに再結合する
///
/// 同一フラグメント由来のトークンはそのまま連結し、
/// フラグメント境界では半角スペースを1個挟む。
///
/// 入力テキストの空白が単一スペースであれば、
/// `join_tokens(&tokenize(text)) == text` が成り立つ（往復特性）。
///
/// # Examples
///
/// ```
/// # use memo_align::tokenizer::{join_tokens, tokenize};
/// let text = "Hello, world! (Really.)";
/// assert_eq!(join_tokens(&tokenize(text)), text);
/// ```
pub fn join_tokens(tokens: &[TextToken]) -> String {
    let mut result = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 && !token.attached_to_previous {
            result.push(' ');
        }
        result.push_str(&token.text);
    }
    result
}

/// 単語を照合用に正規化する
///
/// 小文字化した上で英数字以外の文字を取り除く。
/// 整列時の比較にのみ使用し、出力テキストには影響しない。
///
/// # Examples
///
/// ```
/// # use memo_align::tokenizer::normalize_word;
/// assert_eq!(normalize_word("Don't"), "dont");
/// assert_eq!(normalize_word("Hello,"), "hello");
/// assert_eq!(normalize_word("..."), "");
/// ```
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}
