//! Fixed text blocks of the rendered document.
//!
//! Downstream parsers pattern-match on these strings, so they must stay
//! byte-for-byte stable.

/// Invocation protocol emitted at the top of every non-empty document.
pub const PREAMBLE: &str = r#"# Function Calling Protocol

You can call the functions listed below. When a function call is needed,
your response MUST follow this structure exactly:

1. Put every function call inside a single fenced code block tagged `xml`.
2. Inside the code block, open exactly one `<function_calls>` container.
3. Add one `<invoke>` element per call. Each `<invoke>` MUST carry:
   - a `name` attribute with the exact function name;
   - a `call_id` attribute, starting at 1 and increasing by one for every
     call in the conversation.
4. Add one `<parameter name="...">value</parameter>` element per argument.
   - Write strings, numbers and booleans verbatim.
   - Write lists and objects as JSON text.
5. Close the container with `</function_calls>` and close the code block.

Example:

```xml
<function_calls>
<invoke name="function_name" call_id="1">
<parameter name="param_1">value</parameter>
<parameter name="param_2">["a", "b"]</parameter>
</invoke>
</function_calls>
```

Rules:
- Only call functions that appear in the list below.
- Provide every required parameter.
- After emitting the function call block, stop and wait for the result.
"#;

/// Header that opens the tool catalog.
pub const TOOLS_HEADER: &str = "\n## Tools available\n\n";

/// Line emitted for a tool whose schema text is not valid JSON.
pub const SCHEMA_UNAVAILABLE: &str = "   Schema information unavailable\n";

/// Whole document when no tools are available.
pub const TOOLS_UNAVAILABLE: &str = "## Tools unavailable\nNo tools are currently available to call.";

/// Boundary between the system instructions and the user's content.
pub const CLOSING_DELIMITER: &str =
    "___\n\nThe instructions above end here. The user's message starts below.\n\n___\n";

pub const CUSTOM_INSTRUCTIONS_OPEN: &str = "<custom_instructions>";
pub const CUSTOM_INSTRUCTIONS_CLOSE: &str = "</custom_instructions>";
