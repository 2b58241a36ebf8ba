//! Lower phase - resolves the API into binding tables.

use eyre::Result;
use luagd_bindgen_core::{canonical_enum_name, to_camel_case, to_pascal_case};
use luagd_bindgen_ir::{
    ApiMeta, ArgumentBinding, BindingsIR, ClassBinding, ClassKind, EnumBinding, EnumValueBinding,
    MethodBinding, OperatorBinding, PropertyBinding, UtilityBinding,
};
use luagd_bindgen_manifest::{
    ArgumentDescriptor, ClassDescriptor, EnumDescriptor, ExtensionApi, MethodDescriptor,
    PropertyDescriptor, UTILITY_FUNCTIONS,
};

use crate::{
    pipeline::{CodegenOptions, CompilationContext, Phase},
    resolve::{
        bindable_methods, enum_prefix, resolve_accessors, resolve_operators, strip_enum_prefix,
    },
};

/// Phase that turns the parsed API into [`BindingsIR`].
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Resolve names, operators and accessors into binding tables"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.ir = Some(lower_api(&ctx.api, &ctx.options));
        Ok(())
    }
}

fn lower_api(api: &ExtensionApi, options: &CodegenOptions) -> BindingsIR {
    BindingsIR {
        meta: ApiMeta {
            version: api.version().map(|v| v.to_string()),
        },
        builtin_classes: lower_classes(api, options, &api.builtin_classes, ClassKind::Builtin),
        classes: lower_classes(api, options, &api.classes, ClassKind::Object),
        global_enums: api.global_enums.iter().map(lower_enum).collect(),
        utility_functions: lower_utilities(api),
    }
}

fn lower_classes(
    api: &ExtensionApi,
    options: &CodegenOptions,
    classes: &[ClassDescriptor],
    kind: ClassKind,
) -> Vec<ClassBinding> {
    classes
        .iter()
        .filter(|c| !options.skips_class(&c.name))
        .map(|c| lower_class(api, c, kind))
        .collect()
}

fn lower_class(api: &ExtensionApi, class: &ClassDescriptor, kind: ClassKind) -> ClassBinding {
    let operators = resolve_operators(&class.name, &class.operators)
        .into_iter()
        .map(|(op, metamethod)| OperatorBinding {
            symbol: op.name.clone(),
            metamethod,
            right_type: op.right_type.clone(),
            return_type: op.return_type.clone(),
        })
        .collect();

    ClassBinding {
        name: class.name.clone(),
        kind,
        parent: class.inherits.clone(),
        methods: bindable_methods(class).into_iter().map(lower_method).collect(),
        operators,
        properties: class
            .properties
            .iter()
            .map(|p| lower_property(p, class))
            .collect(),
        enums: class.enums.iter().map(lower_enum).collect(),
        singletons: api
            .singletons_of_type(&class.name)
            .map(|s| s.name.clone())
            .collect(),
    }
}

fn lower_method(method: &MethodDescriptor) -> MethodBinding {
    MethodBinding {
        name: method.name.clone(),
        luau_name: to_pascal_case(&method.name),
        is_const: method.is_const,
        is_static: method.is_static,
        is_vararg: method.is_vararg,
        arguments: method.arguments.iter().map(lower_argument).collect(),
        return_type: method.returns().map(str::to_string),
    }
}

fn lower_argument(argument: &ArgumentDescriptor) -> ArgumentBinding {
    ArgumentBinding {
        name: argument.name.clone(),
        ty: argument.ty.clone(),
    }
}

fn lower_property(property: &PropertyDescriptor, class: &ClassDescriptor) -> PropertyBinding {
    let accessors = resolve_accessors(property, class);

    PropertyBinding {
        name: property.name.clone(),
        // names without letters (none in practice) stay as declared
        luau_name: to_camel_case(&property.name).unwrap_or_else(|| property.name.clone()),
        ty: property.ty.clone(),
        setter: accessors.setter.resolved().map(str::to_string),
        getter: accessors.getter.resolved().map(str::to_string),
        setter_missing: accessors.setter.is_missing(),
        getter_missing: accessors.getter.is_missing(),
    }
}

fn lower_enum(descriptor: &EnumDescriptor) -> EnumBinding {
    let prefix = enum_prefix(&descriptor.value_names());

    EnumBinding {
        name: canonical_enum_name(&descriptor.name),
        is_bitfield: descriptor.is_bitfield,
        values: descriptor
            .values
            .iter()
            .map(|v| EnumValueBinding {
                name: v.name.clone(),
                luau_name: strip_enum_prefix(&prefix, &v.name),
                value: v.value,
            })
            .collect(),
        prefix,
    }
}

/// Allow-listed utility functions the API declares, in allow-list order.
fn lower_utilities(api: &ExtensionApi) -> Vec<UtilityBinding> {
    UTILITY_FUNCTIONS
        .iter()
        .filter_map(|f| {
            let declared = api.utility_function(f.name)?;
            Some(UtilityBinding {
                name: f.name.to_string(),
                luau_name: f.luau_name().to_string(),
                is_print: f.is_print,
                is_vararg: declared.is_vararg,
            })
        })
        .collect()
}
