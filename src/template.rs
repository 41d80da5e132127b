//! Render the throwaway contract source for one batch index.
//!
//! Every rendering is identical except for the embedded integer literal,
//! so the downstream VM tests get 1000 bytecodes that differ only in the
//! constant their `return_const()` returns.

/// CRLF line endings, matching what the 0.4-era toolchain was fed.
pub fn render(idx: u32) -> String {
    format!(
        concat!(
            "pragma solidity ^0.4.0;\r\n",
            "contract TestB{{\r\n",
            "   constructor() payable public{{\r\n",
            "   }}\r\n",
            "   function return_const() public returns (uint){{\r\n",
            "       return {idx};\r\n",
            "   }}\r\n",
            "}}\r\n"
        ),
        idx = idx
    )
}
