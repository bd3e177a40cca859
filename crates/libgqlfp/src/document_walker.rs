//! Single-pass structural scanner for GraphQL executable documents.
//!
//! The walker recognizes the executable subset of the October 2021 GraphQL
//! grammar (operations and fragment definitions) directly over raw bytes,
//! writing a framing marker and the construct's payload to the digest at
//! each step of the descent. No syntax tree is built and nothing is
//! allocated; the only state is a byte offset and a recursion depth.
//!
//! Formatting never reaches the digest: insignificant bytes (whitespace,
//! commas, comments) are skipped between tokens, type references are
//! re-emitted tightly packed, and block strings are normalized before
//! their lines are written.

use crate::FingerprintError;
use crate::FingerprintHasher;
use crate::FramingMarker;
use crate::ValueKind;
use crate::block_string::BlockStringLines;
use crate::block_string::trim_blank_suffix_lines;
use crate::byte_classes::is_digit;
use crate::byte_classes::is_hex_digit;
use crate::byte_classes::is_insignificant;
use crate::byte_classes::is_name_continue;
use crate::byte_classes::is_name_start;
use crate::byte_classes::is_whitespace;

/// Maximum nesting depth across selection sets, list and input-object
/// values, and list types, counted together. Documents deeper than this
/// fail with an unexpected-token error at the opening byte instead of
/// exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 128;

// ===========================================================================
// Entry points
// ===========================================================================

/// Reads a complete document (one or more definitions) from `input`,
/// writing its canonical byte stream to `hasher`.
///
/// The entire input must be consumed; trailing bytes that do not start
/// another definition are an error, as is an input that is empty after
/// skipping insignificant bytes.
///
/// Reference: <https://spec.graphql.org/October2021/#Document>
pub fn read_document<'src, H>(
    hasher: &mut H,
    input: &'src [u8],
) -> Result<&'src [u8], FingerprintError>
where
    H: FingerprintHasher + ?Sized,
{
    let mut walker = DocumentWalker::new(hasher, input);
    walker.walk_document()?;
    Ok(walker.rest())
}

/// Reads one brace-delimited selection set, which must begin at the first
/// byte of `input`, and returns the unconsumed suffix.
pub fn read_selection_set<'src, H>(
    hasher: &mut H,
    input: &'src [u8],
) -> Result<&'src [u8], FingerprintError>
where
    H: FingerprintHasher + ?Sized,
{
    let mut walker = DocumentWalker::new(hasher, input);
    walker.walk_selection_set()?;
    Ok(walker.rest())
}

/// Reads one value literal beginning at the first byte of `input` and
/// returns what kind of literal it was along with the unconsumed suffix.
///
/// Reference: <https://spec.graphql.org/October2021/#Value>
pub fn read_value<'src, H>(
    hasher: &mut H,
    input: &'src [u8],
) -> Result<(ValueKind, &'src [u8]), FingerprintError>
where
    H: FingerprintHasher + ?Sized,
{
    let mut walker = DocumentWalker::new(hasher, input);
    let kind = walker.walk_value()?;
    Ok((kind, walker.rest()))
}

/// Reads one type reference and writes its tightly packed text (no
/// insignificant bytes, no framing marker) to `hasher`, so `[ T ] !` and
/// `[T]!` produce identical output.
pub fn read_type<'src, H>(
    hasher: &mut H,
    input: &'src [u8],
) -> Result<&'src [u8], FingerprintError>
where
    H: FingerprintHasher + ?Sized,
{
    let mut walker = DocumentWalker::new(hasher, input);
    walker.walk_type()?;
    Ok(walker.rest())
}

/// Reads one name (a name-start byte followed by any run of letters,
/// digits, and underscores) and returns it with the unconsumed suffix.
pub fn read_name(input: &[u8]) -> Result<(&[u8], &[u8]), FingerprintError> {
    let Some(&first) = input.first() else {
        return Err(FingerprintError::unexpected_end(0));
    };
    if !is_name_start(first) {
        return Err(FingerprintError::unexpected_token(0));
    }
    let mut len = 1;
    while len < input.len() && is_name_continue(input[len]) {
        len += 1;
    }
    Ok((&input[..len], &input[len..]))
}

/// Strips leading insignificant content: spaces, commas, tabs, newlines,
/// carriage returns, and `#` comments running to the end of the line.
pub fn skip_insignificant(input: &[u8]) -> &[u8] {
    let mut rest = input;
    loop {
        match rest.first() {
            Some(&b'#') => match memchr::memchr(b'\n', rest) {
                Some(line_end) => rest = &rest[line_end + 1..],
                None => return &rest[rest.len()..],
            },
            Some(&byte) if is_insignificant(byte) => rest = &rest[1..],
            _ => return rest,
        }
    }
}

// ===========================================================================
// Walker
// ===========================================================================

struct DocumentWalker<'src, 'h, H: ?Sized> {
    source: &'src [u8],
    pos: usize,
    depth: usize,
    hasher: &'h mut H,
}

impl<'src, 'h, H: FingerprintHasher + ?Sized> DocumentWalker<'src, 'h, H> {
    fn new(hasher: &'h mut H, source: &'src [u8]) -> Self {
        Self {
            source,
            pos: 0,
            depth: 0,
            hasher,
        }
    }

    // =======================================================================
    // Cursor helpers
    // =======================================================================

    fn rest(&self) -> &'src [u8] {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn eof(&self) -> FingerprintError {
        FingerprintError::unexpected_end(self.source.len())
    }

    fn bad_token(&self) -> FingerprintError {
        FingerprintError::unexpected_token(self.pos)
    }

    fn skip_insignificant(&mut self) {
        let rest = skip_insignificant(self.rest());
        self.pos = self.source.len() - rest.len();
    }

    fn expect_not_empty(&self) -> Result<(), FingerprintError> {
        if self.pos < self.source.len() {
            Ok(())
        } else {
            Err(self.eof())
        }
    }

    fn expect_token(&mut self, token: &[u8]) -> Result<(), FingerprintError> {
        self.expect_not_empty()?;
        if !self.rest().starts_with(token) {
            return Err(self.bad_token());
        }
        self.pos += token.len();
        Ok(())
    }

    fn write_marker(&mut self, marker: FramingMarker) {
        self.hasher.write(&[marker.as_byte()]);
    }

    fn walk_name(&mut self) -> Result<&'src [u8], FingerprintError> {
        let (name, _) = read_name(self.rest()).map_err(|err| err.offset_by(self.pos))?;
        self.pos += name.len();
        Ok(name)
    }

    fn enter_nested(&mut self) -> Result<(), FingerprintError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.bad_token());
        }
        self.depth += 1;
        Ok(())
    }

    fn exit_nested(&mut self) {
        self.depth -= 1;
    }

    // =======================================================================
    // Definitions
    // =======================================================================

    fn walk_document(&mut self) -> Result<(), FingerprintError> {
        self.skip_insignificant();
        self.expect_not_empty()?;
        while self.pos < self.source.len() {
            self.walk_definition()?;
            self.skip_insignificant();
        }
        Ok(())
    }

    fn walk_definition(&mut self) -> Result<(), FingerprintError> {
        self.expect_not_empty()?;
        let rest = self.rest();
        if rest[0] == b'{' {
            // Anonymous operation, implicitly a query.
            self.write_marker(FramingMarker::Query);
            return self.walk_selection_set();
        }
        if rest.starts_with(b"fragment") {
            self.pos += b"fragment".len();
            self.skip_insignificant();
            let name_pos = self.pos;
            let name = self.walk_name()?;
            if name == b"on" {
                // `on` is reserved for the type condition.
                return Err(FingerprintError::unexpected_token(name_pos));
            }
            self.skip_insignificant();
            self.expect_token(b"on")?;
            self.skip_insignificant();
            let type_name = self.walk_name()?;
            self.skip_insignificant();
            self.write_marker(FramingMarker::FragmentDefinition);
            self.hasher.write(name);
            self.write_marker(FramingMarker::Type);
            self.hasher.write(type_name);
            self.walk_directives()?;
            self.skip_insignificant();
            return self.walk_selection_set();
        }
        self.walk_operation_definition()
    }

    fn walk_operation_definition(&mut self) -> Result<(), FingerprintError> {
        let rest = self.rest();
        if rest.starts_with(b"query") {
            self.write_marker(FramingMarker::Query);
            self.pos += b"query".len();
        } else if rest.starts_with(b"mutation") {
            self.write_marker(FramingMarker::Mutation);
            self.pos += b"mutation".len();
        } else if rest.starts_with(b"subscription") {
            self.write_marker(FramingMarker::Subscription);
            self.pos += b"subscription".len();
        } else {
            return Err(self.bad_token());
        }
        self.skip_insignificant();
        self.expect_not_empty()?;

        if is_name_start(self.source[self.pos]) {
            // Operation names are written bare, framed by the operation
            // marker itself.
            let name = self.walk_name()?;
            self.hasher.write(name);
            self.skip_insignificant();
            self.expect_not_empty()?;
        }

        if self.source[self.pos] == b'(' {
            self.pos += 1;
            self.skip_insignificant();
            self.expect_not_empty()?;
            self.walk_variable_definitions()?;
            self.skip_insignificant();
        }

        self.walk_directives()?;
        self.skip_insignificant();
        self.walk_selection_set()
    }

    fn walk_variable_definitions(&mut self) -> Result<(), FingerprintError> {
        loop {
            if self.source[self.pos] != b'$' {
                return Err(self.bad_token());
            }
            self.pos += 1;
            self.skip_insignificant();
            let name = self.walk_name()?;
            self.write_marker(FramingMarker::VariableDefinition);
            self.hasher.write(name);

            self.skip_insignificant();
            self.expect_token(b":")?;
            self.skip_insignificant();
            self.write_marker(FramingMarker::Type);
            self.walk_type()?;
            self.skip_insignificant();
            self.expect_not_empty()?;

            if self.source[self.pos] == b'=' {
                self.pos += 1;
                self.skip_insignificant();
                self.walk_value()?;
                self.skip_insignificant();
            }

            self.walk_directives()?;
            self.skip_insignificant();
            self.expect_not_empty()?;
            if self.source[self.pos] == b')' {
                self.pos += 1;
                return Ok(());
            }
        }
    }

    // =======================================================================
    // Selections
    // =======================================================================

    fn walk_selection_set(&mut self) -> Result<(), FingerprintError> {
        self.enter_nested()?;
        let result = self.walk_selection_set_impl();
        self.exit_nested();
        result
    }

    fn walk_selection_set_impl(&mut self) -> Result<(), FingerprintError> {
        self.expect_token(b"{")?;
        self.skip_insignificant();
        self.write_marker(FramingMarker::SelectionSet);
        loop {
            if self.rest().starts_with(b"...") {
                self.pos += 3;
                self.skip_insignificant();
                let rest = self.rest();
                if rest.len() > 3 && rest.starts_with(b"on") && is_insignificant(rest[2]) {
                    // Inline fragment with a type condition.
                    self.pos += 3;
                    self.skip_insignificant();
                    let type_name = self.walk_name()?;
                    self.write_marker(FramingMarker::InlineFragment);
                    self.write_marker(FramingMarker::Type);
                    self.hasher.write(type_name);
                    self.skip_insignificant();
                    self.walk_directives()?;
                    self.skip_insignificant();
                    self.walk_selection_set()?;
                    self.skip_insignificant();
                } else if rest.first().is_some_and(|&byte| is_name_start(byte)) {
                    // Fragment spread.
                    let name = self.walk_name()?;
                    self.write_marker(FramingMarker::FragmentSpread);
                    self.hasher.write(name);
                    self.skip_insignificant();
                    self.walk_directives()?;
                    self.skip_insignificant();
                } else {
                    // Inline fragment without a type condition.
                    self.write_marker(FramingMarker::InlineFragment);
                    self.walk_directives()?;
                    self.skip_insignificant();
                    self.walk_selection_set()?;
                    self.skip_insignificant();
                }
            } else {
                let name = self.walk_name()?;
                self.write_marker(FramingMarker::Field);
                self.hasher.write(name);

                self.skip_insignificant();
                self.expect_not_empty()?;
                if self.source[self.pos] == b':' {
                    // The name just written was an alias; the actual
                    // field name follows.
                    self.pos += 1;
                    self.skip_insignificant();
                    let field_name = self.walk_name()?;
                    self.write_marker(FramingMarker::FieldAliasedName);
                    self.hasher.write(field_name);
                    self.skip_insignificant();
                }

                self.expect_not_empty()?;
                if self.source[self.pos] == b'(' {
                    self.walk_arguments()?;
                    self.skip_insignificant();
                }

                self.walk_directives()?;
                self.skip_insignificant();
                self.expect_not_empty()?;
                if self.source[self.pos] == b'{' {
                    self.walk_selection_set()?;
                }
                self.skip_insignificant();
            }

            self.expect_not_empty()?;
            if self.source[self.pos] == b'}' {
                self.pos += 1;
                self.write_marker(FramingMarker::SelectionSetEnd);
                return Ok(());
            }
        }
    }

    fn walk_arguments(&mut self) -> Result<(), FingerprintError> {
        self.expect_token(b"(")?;
        self.skip_insignificant();
        loop {
            let name = self.walk_name()?;
            self.write_marker(FramingMarker::Argument);
            self.hasher.write(name);

            self.skip_insignificant();
            self.expect_token(b":")?;
            self.skip_insignificant();
            self.walk_value()?;
            self.skip_insignificant();

            self.expect_not_empty()?;
            if self.source[self.pos] == b')' {
                self.pos += 1;
                return Ok(());
            }
        }
    }

    fn walk_directives(&mut self) -> Result<(), FingerprintError> {
        while self.peek() == Some(b'@') {
            self.pos += 1;
            self.skip_insignificant();
            let name = self.walk_name()?;
            self.write_marker(FramingMarker::Directive);
            self.hasher.write(name);

            self.skip_insignificant();
            self.expect_not_empty()?;
            if self.source[self.pos] == b'(' {
                self.walk_arguments()?;
            }
            self.skip_insignificant();
        }
        Ok(())
    }

    // =======================================================================
    // Types
    // =======================================================================

    fn walk_type(&mut self) -> Result<(), FingerprintError> {
        self.enter_nested()?;
        let result = self.walk_type_impl();
        self.exit_nested();
        result
    }

    fn walk_type_impl(&mut self) -> Result<(), FingerprintError> {
        self.expect_not_empty()?;
        if self.source[self.pos] == b'[' {
            self.pos += 1;
            self.hasher.write(b"[");
            self.skip_insignificant();
            self.walk_type()?;
            self.skip_insignificant();
            self.expect_not_empty()?;
            if self.source[self.pos] != b']' {
                return Err(self.bad_token());
            }
            self.pos += 1;
            self.hasher.write(b"]");
        } else if is_name_start(self.source[self.pos]) {
            let name = self.walk_name()?;
            self.hasher.write(name);
        } else {
            return Err(self.bad_token());
        }

        // A non-null `!` binds to this nesting level. Insignificant bytes
        // before it are consumed only when the `!` is actually there.
        let after = skip_insignificant(self.rest());
        if after.first() == Some(&b'!') {
            self.pos = self.source.len() - after.len() + 1;
            self.hasher.write(b"!");
        }
        Ok(())
    }

    // =======================================================================
    // Values
    // =======================================================================

    fn walk_value(&mut self) -> Result<ValueKind, FingerprintError> {
        self.enter_nested()?;
        let result = self.walk_value_impl();
        self.exit_nested();
        result
    }

    fn walk_value_impl(&mut self) -> Result<ValueKind, FingerprintError> {
        self.expect_not_empty()?;
        let rest = self.rest();

        // Keyword literals match by prefix alone, like every other keyword
        // in this grammar.
        if rest.starts_with(b"null") {
            self.write_marker(FramingMarker::ValueNull);
            self.pos += b"null".len();
            return Ok(ValueKind::Null);
        }
        if rest.starts_with(b"true") {
            self.write_marker(FramingMarker::ValueTrue);
            self.pos += b"true".len();
            return Ok(ValueKind::True);
        }
        if rest.starts_with(b"false") {
            self.write_marker(FramingMarker::ValueFalse);
            self.pos += b"false".len();
            return Ok(ValueKind::False);
        }

        match rest[0] {
            b'$' => {
                self.pos += 1;
                self.skip_insignificant();
                let name = self.walk_name()?;
                self.write_marker(FramingMarker::ValueVariable);
                self.hasher.write(name);
                Ok(ValueKind::Variable)
            }
            byte if byte == b'-' || is_digit(byte) => self.walk_number(),
            b'"' => {
                if rest.starts_with(b"\"\"\"") {
                    self.walk_block_string()?;
                    Ok(ValueKind::BlockString)
                } else {
                    self.walk_single_line_string()?;
                    Ok(ValueKind::String)
                }
            }
            b'[' => {
                self.write_marker(FramingMarker::ValueList);
                self.pos += 1;
                self.skip_insignificant();
                loop {
                    self.expect_not_empty()?;
                    if self.source[self.pos] == b']' {
                        self.pos += 1;
                        self.write_marker(FramingMarker::ValueListEnd);
                        return Ok(ValueKind::List);
                    }
                    self.walk_value()?;
                    self.skip_insignificant();
                }
            }
            b'{' => {
                self.write_marker(FramingMarker::ValueInputObject);
                self.pos += 1;
                self.skip_insignificant();
                loop {
                    self.expect_not_empty()?;
                    if self.source[self.pos] == b'}' {
                        self.pos += 1;
                        self.write_marker(FramingMarker::ValueInputObjectEnd);
                        return Ok(ValueKind::InputObject);
                    }
                    let name = self.walk_name()?;
                    self.write_marker(FramingMarker::ValueInputObjectField);
                    self.hasher.write(name);
                    self.skip_insignificant();
                    self.expect_token(b":")?;
                    self.skip_insignificant();
                    self.walk_value()?;
                    self.skip_insignificant();
                }
            }
            _ => {
                let name = self.walk_name()?;
                self.write_marker(FramingMarker::ValueEnum);
                self.hasher.write(name);
                Ok(ValueKind::Enum)
            }
        }
    }

    /// Reads an integer or float literal. The payload is the raw source
    /// text of the number, sign through last consumed byte.
    ///
    /// Reference: <https://spec.graphql.org/October2021/#sec-Int-Value>
    fn walk_number(&mut self) -> Result<ValueKind, FingerprintError> {
        let start = self.pos;
        if self.source[self.pos] == b'-' {
            self.pos += 1;
            self.expect_not_empty()?;
        }
        if self.source[self.pos] == b'0' {
            // A leading zero is the whole integer part.
            self.pos += 1;
        } else {
            while self.peek().is_some_and(is_digit) {
                self.pos += 1;
            }
        }

        if let Some(b'.' | b'e' | b'E') = self.peek() {
            self.walk_float_rest()?;
            self.write_marker(FramingMarker::ValueFloat);
            self.hasher.write(&self.source[start..self.pos]);
            return Ok(ValueKind::Float);
        }
        self.write_marker(FramingMarker::ValueInt);
        self.hasher.write(&self.source[start..self.pos]);
        Ok(ValueKind::Int)
    }

    /// Continues a numeric literal past the integer part: a fractional
    /// part requires at least one digit, an exponent part accepts an
    /// optional sign and any run of digits, including none. The digest
    /// sees the raw text, so `1e` and `1e0` stay distinct.
    fn walk_float_rest(&mut self) -> Result<(), FingerprintError> {
        if self.peek() == Some(b'.') {
            self.pos += 1;
            let fraction_start = self.pos;
            while self.peek().is_some_and(is_digit) {
                self.pos += 1;
            }
            if self.pos == fraction_start {
                return Err(self.bad_token());
            }
        }
        if let Some(b'e' | b'E') = self.peek() {
            self.pos += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.pos += 1;
            }
            while self.peek().is_some_and(is_digit) {
                self.pos += 1;
            }
        }
        Ok(())
    }

    /// Reads a `"`-delimited single-line string. Escape sequences are
    /// validated but not decoded; the payload is the raw bytes between
    /// the quotes.
    fn walk_single_line_string(&mut self) -> Result<(), FingerprintError> {
        self.pos += 1;
        let payload_start = self.pos;
        loop {
            let Some(byte) = self.peek() else {
                return Err(self.eof());
            };
            match byte {
                b'"' => {
                    let payload = &self.source[payload_start..self.pos];
                    self.pos += 1;
                    self.write_marker(FramingMarker::ValueString);
                    self.hasher.write(payload);
                    return Ok(());
                }
                b'\\' => self.walk_escape_sequence()?,
                _ if byte < 0x20 => return Err(self.bad_token()),
                _ => self.pos += 1,
            }
        }
    }

    fn walk_escape_sequence(&mut self) -> Result<(), FingerprintError> {
        let escape_start = self.pos;
        match self.source.get(self.pos + 1).copied() {
            None => Err(self.eof()),
            Some(b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't') => {
                self.pos += 2;
                Ok(())
            }
            Some(b'u') => match self.source.get(self.pos + 2..self.pos + 6) {
                Some(hex) if hex.iter().copied().all(is_hex_digit) => {
                    self.pos += 6;
                    Ok(())
                }
                Some(_) => Err(FingerprintError::unexpected_token(escape_start)),
                None => Err(self.eof()),
            },
            Some(_) => Err(FingerprintError::unexpected_token(escape_start)),
        }
    }

    /// Reads a `"""`-delimited block string, normalizes its interior, and
    /// writes it line by line.
    ///
    /// Reference: <https://spec.graphql.org/October2021/#BlockStringValue()>
    fn walk_block_string(&mut self) -> Result<(), FingerprintError> {
        let s = self.source;
        self.pos += 3;
        let interior_start = self.pos;

        // Common indentation over every line except the one that starts
        // the closing delimiter. An empty interior line counts as indent
        // zero and wins the minimum.
        let mut prefix_len = 0;
        let mut prefix_len_set = false;
        // First byte that is neither whitespace nor a newline; content
        // exists when one was seen before the closing delimiter.
        let mut first_content: Option<usize> = None;

        let mut i = self.pos;
        loop {
            if i >= s.len() {
                return Err(self.eof());
            }
            match s[i] {
                b'"' => {
                    if i + 2 < s.len() && s[i + 1] == b'"' && s[i + 2] == b'"' {
                        self.write_marker(FramingMarker::ValueString);
                        if first_content.is_some_and(|first| first != i) {
                            let interior = trim_blank_suffix_lines(&s[interior_start..i]);
                            for line in BlockStringLines::new(interior, prefix_len) {
                                self.hasher.write(line);
                            }
                        }
                        self.pos = i + 3;
                        return Ok(());
                    }
                    // A lone quote inside the block.
                    if first_content.is_none() {
                        first_content = Some(i);
                    }
                }
                b'\\' => {
                    if first_content.is_none() {
                        first_content = Some(i);
                    }
                    if i + 3 < s.len()
                        && s[i + 1] == b'"'
                        && s[i + 2] == b'"'
                        && s[i + 3] == b'"'
                    {
                        // Escaped closing delimiter, kept verbatim.
                        i += 4;
                        continue;
                    }
                }
                b'\n' => {
                    let mut indent = 0;
                    i += 1;
                    while i < s.len() && is_whitespace(s[i]) {
                        indent += 1;
                        i += 1;
                    }
                    if i < s.len() && s[i] != b'\n' && first_content.is_none() {
                        first_content = Some(i);
                    }
                    let starts_closing_line = i + 2 < s.len() && s[i + 1] == b'"' && s[i + 2] == b'"';
                    if !starts_closing_line {
                        prefix_len = if prefix_len_set {
                            prefix_len.min(indent)
                        } else {
                            indent
                        };
                        prefix_len_set = true;
                    }
                    continue;
                }
                b' ' | b'\t' => {}
                byte => {
                    if byte < 0x20 {
                        return Err(FingerprintError::unexpected_token(i));
                    }
                    if first_content.is_none() {
                        first_content = Some(i);
                    }
                }
            }
            i += 1;
        }
    }
}
