//! Method argument naming.
//!
//! Generated method signatures use the method name for the call itself; an
//! argument carrying the same name shadows it and breaks the generated
//! binding.

use crate::model::Interface;
use crate::semantic::diagnostics::{Diagnostic, DiagnosticSink, codes};

/// Check every method of an interface for arguments that shadow the
/// method's own name. Output arguments are checked before inputs, matching
/// declaration processing order.
pub fn check_interface_methods(interface: &Interface, file: &str, sink: &mut dyn DiagnosticSink) {
    for method in &interface.methods {
        for argument in method.out_args.iter().chain(method.in_args.iter()) {
            if argument.name == method.name {
                sink.accept(
                    Diagnostic::error(file, "Parameters cannot share name with method")
                        .with_feature(argument.name.clone())
                        .with_code(codes::ARGUMENT_SHADOWS_METHOD),
                );
            }
        }
    }
}
