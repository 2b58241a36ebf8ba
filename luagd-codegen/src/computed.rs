//! Binding statistics computed after lowering.

use luagd_bindgen_ir::BindingsIR;
use luagd_bindgen_manifest::ExtensionApi;
use serde::Serialize;

use crate::{pipeline::CodegenOptions, resolve::resolve_accessors};

/// Counts of what was bound and what was left out.
///
/// Computed once by `AnalyzePhase` and shared by reports.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ComputedData {
    pub builtin_class_count: usize,
    pub class_count: usize,
    /// Classes in the API that get no bindings.
    pub skipped_class_count: usize,
    pub method_count: usize,
    /// Virtual and hand-bound methods of bound classes.
    pub skipped_method_count: usize,
    pub operator_count: usize,
    /// Operators without a metamethod or shadowed by another overload.
    pub dropped_operator_count: usize,
    pub property_count: usize,
    /// Declared setters and getters that resolved to no method.
    pub missing_accessor_count: usize,
    /// Global and class-scoped enums.
    pub enum_count: usize,
    pub enum_value_count: usize,
    pub singleton_count: usize,
    pub utility_count: usize,
}

impl ComputedData {
    /// Compute statistics from the API and the bindings lowered from it.
    pub fn compute(api: &ExtensionApi, options: &CodegenOptions, ir: &BindingsIR) -> Self {
        let declared_classes = api.builtin_classes.len() + api.classes.len();
        let bound_classes = ir.builtin_classes.len() + ir.classes.len();

        let mut declared_methods = 0;
        let mut declared_operators = 0;
        let mut missing_accessor_count = 0;
        for (_, class) in options.bound_classes(api) {
            declared_methods += class.methods.len();
            declared_operators += class.operators.len();
            missing_accessor_count += class
                .properties
                .iter()
                .map(|p| {
                    let resolution = resolve_accessors(p, class);
                    [resolution.setter, resolution.getter]
                        .iter()
                        .filter(|a| a.is_missing())
                        .count()
                })
                .sum::<usize>();
        }

        let method_count = ir.all_classes().map(|c| c.methods.len()).sum();
        let operator_count = ir.all_classes().map(|c| c.operators.len()).sum();
        let class_enums = ir.all_classes().flat_map(|c| c.enums.iter());
        let enums: Vec<_> = ir.global_enums.iter().chain(class_enums).collect();

        Self {
            builtin_class_count: ir.builtin_classes.len(),
            class_count: ir.classes.len(),
            skipped_class_count: declared_classes - bound_classes,
            method_count,
            skipped_method_count: declared_methods - method_count,
            operator_count,
            dropped_operator_count: declared_operators - operator_count,
            property_count: ir.all_classes().map(|c| c.properties.len()).sum(),
            missing_accessor_count,
            enum_count: enums.len(),
            enum_value_count: enums.iter().map(|e| e.values.len()).sum(),
            singleton_count: ir.all_classes().map(|c| c.singletons.len()).sum(),
            utility_count: ir.utility_functions.len(),
        }
    }
}
