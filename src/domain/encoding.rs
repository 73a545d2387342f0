//! 编码探测与解码
//!
//! 取文件前 1KB 探测编码：
//! 1. BOM（UTF-8 / UTF-16LE / UTF-16BE）
//! 2. 合法 UTF-8 直接流式透传，不整体读入内存
//! 3. 其余交给 chardetng 按字节分布猜测；猜成 windows-1252 时强制按 GB18030 解码
//!
//! 解码失败的字节替换为 U+FFFD，不视为致命错误。

use std::io::{self, BufRead, BufReader, Cursor, Read};

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, GB18030, UTF_8, WINDOWS_1252};

/// 探测编码时读取的字节数
pub const SNIFF_LEN: usize = 1024;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 根据文件开头的字节判断编码
///
/// `complete` 表示 `prefix` 已是完整文件（文件不足 1KB），
/// 此时结尾被截断的多字节序列不再被视为合法 UTF-8。
pub fn sniff_encoding(prefix: &[u8], complete: bool) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(prefix) {
        return encoding;
    }

    if is_utf8(prefix, complete) {
        return UTF_8;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(prefix, complete);
    let guess = detector.guess(None, false);

    // 很多中文 txt 会被误判为 Latin-1 系
    if guess == WINDOWS_1252 {
        GB18030
    } else {
        guess
    }
}

fn is_utf8(bytes: &[u8], complete: bool) -> bool {
    match std::str::from_utf8(bytes) {
        Ok(_) => true,
        Err(e) => !complete && e.error_len().is_none(),
    }
}

/// 解码后的文本流
pub struct DecodedText<'a> {
    encoding: &'static Encoding,
    reader: Box<dyn BufRead + 'a>,
    malformed: bool,
}

impl<'a> DecodedText<'a> {
    /// 实际使用的编码
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    /// 逐行读取（按 `\n` 切分，不含换行符）
    pub fn lines(self) -> DecodedLines<'a> {
        DecodedLines {
            reader: self.reader,
            buf: Vec::new(),
            malformed: self.malformed,
        }
    }
}

impl std::fmt::Debug for DecodedText<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedText")
            .field("encoding", &self.encoding.name())
            .field("malformed", &self.malformed)
            .finish()
    }
}

/// 行迭代器
pub struct DecodedLines<'a> {
    reader: Box<dyn BufRead + 'a>,
    buf: Vec<u8>,
    malformed: bool,
}

impl DecodedLines<'_> {
    /// 截至目前是否遇到过非法字节序列（整体解码的替换也计入）
    pub fn had_malformed(&self) -> bool {
        self.malformed
    }
}

impl Iterator for DecodedLines<'_> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                }
                // 复用 buf 的容量，行内容另行拷贝
                let line = match std::str::from_utf8(&self.buf) {
                    Ok(line) => line.to_owned(),
                    Err(_) => {
                        if !self.malformed {
                            tracing::warn!("Malformed UTF-8 sequence replaced while reading");
                            self.malformed = true;
                        }
                        String::from_utf8_lossy(&self.buf).into_owned()
                    }
                };
                Some(Ok(line))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// 探测编码并返回规范化的 Unicode 文本流
///
/// UTF-8 时保持流式读取；其他编码整体读入后一次性解码。
/// 只有底层读取失败才返回错误。
pub fn decode<'a, R: Read + 'a>(mut reader: R) -> io::Result<DecodedText<'a>> {
    let mut prefix = Vec::with_capacity(SNIFF_LEN);
    (&mut reader)
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut prefix)?;
    let complete = prefix.len() < SNIFF_LEN;
    let encoding = sniff_encoding(&prefix, complete);

    tracing::debug!(encoding = encoding.name(), "Detected manuscript encoding");

    if encoding == UTF_8 {
        if prefix.starts_with(UTF8_BOM) {
            prefix.drain(..UTF8_BOM.len());
        }
        let stream = Cursor::new(prefix).chain(reader);
        return Ok(DecodedText {
            encoding,
            reader: Box::new(BufReader::new(stream)),
            malformed: false,
        });
    }

    let mut bytes = prefix;
    reader.read_to_end(&mut bytes)?;
    let (text, actual, malformed) = encoding.decode(&bytes);
    if malformed {
        tracing::warn!(
            encoding = actual.name(),
            "Malformed byte sequences replaced during decode"
        );
    }

    Ok(DecodedText {
        encoding: actual,
        reader: Box::new(Cursor::new(text.into_owned().into_bytes())),
        malformed,
    })
}
