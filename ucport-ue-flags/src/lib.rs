// UE3 property flag vocabulary.
//
// Mirrors EPropertyFlags (CPF_*) as printed by UE3-era SDK generators in the
// trailing comment of every member line:
//   // 0x0040 (0x0004) [0x0000000000000003]              ( CPF_Edit | CPF_Const )

// ---------------------------------------------------------------------------
// EPropertyFlags (CPF_*): uint64
// ---------------------------------------------------------------------------

/// No flags.
pub const CPF_NONE: u64 = 0x0000_0000_0000_0000;
/// Property is user-settable in the editor.
pub const CPF_EDIT: u64 = 0x0000_0000_0000_0001;
/// Actor's property always matches class's default actor property.
pub const CPF_CONST: u64 = 0x0000_0000_0000_0002;
/// Variable is writable by the input system.
pub const CPF_INPUT: u64 = 0x0000_0000_0000_0004;
/// Object can be exported with actor.
pub const CPF_EXPORT_OBJECT: u64 = 0x0000_0000_0000_0008;
/// Optional parameter (if CPF_Param is set).
pub const CPF_OPTIONAL_PARM: u64 = 0x0000_0000_0000_0010;
/// Property is relevant to network replication.
pub const CPF_NET: u64 = 0x0000_0000_0000_0020;
/// Elements of an array can be modified, but its size cannot be changed.
pub const CPF_EDIT_FIXED_SIZE: u64 = 0x0000_0000_0000_0040;
/// Function/When call parameter.
pub const CPF_PARM: u64 = 0x0000_0000_0000_0080;
/// Value is copied out after function call.
pub const CPF_OUT_PARM: u64 = 0x0000_0000_0000_0100;
/// Property is a short-circuitable evaluation function parm.
pub const CPF_SKIP_PARM: u64 = 0x0000_0000_0000_0200;
/// Return value.
pub const CPF_RETURN_PARM: u64 = 0x0000_0000_0000_0400;
/// Coerce args into this function parameter.
pub const CPF_COERCE_PARM: u64 = 0x0000_0000_0000_0800;
/// Property is native: C++ code is responsible for serializing it.
pub const CPF_NATIVE: u64 = 0x0000_0000_0000_1000;
/// Property is transient: shouldn't be saved, zero-filled at load time.
pub const CPF_TRANSIENT: u64 = 0x0000_0000_0000_2000;
/// Property should be loaded/saved as permanent profile.
pub const CPF_CONFIG: u64 = 0x0000_0000_0000_4000;
/// Property should be loaded as localizable text.
pub const CPF_LOCALIZED: u64 = 0x0000_0000_0000_8000;
// 0x0000_0000_0001_0000: reserved
/// Property is uneditable in the editor.
pub const CPF_EDIT_CONST: u64 = 0x0000_0000_0002_0000;
/// Load config from base class, not subclass.
pub const CPF_GLOBAL_CONFIG: u64 = 0x0000_0000_0004_0000;
/// Property containts component references.
pub const CPF_COMPONENT: u64 = 0x0000_0000_0008_0000;
/// Property should never be exported as NoInit.
pub const CPF_ALWAYS_INIT: u64 = 0x0000_0000_0010_0000;
/// Property should always be reset to the default value during any type of duplication.
pub const CPF_DUPLICATE_TRANSIENT: u64 = 0x0000_0000_0020_0000;
/// Fields need construction/destruction.
pub const CPF_NEED_CTOR_LINK: u64 = 0x0000_0000_0040_0000;
/// Property should not be exported to the native class header file.
pub const CPF_NO_EXPORT: u64 = 0x0000_0000_0080_0000;
/// Property should not be imported when creating an object from text (copy/paste).
pub const CPF_NO_IMPORT: u64 = 0x0000_0000_0100_0000;
/// Hide clear (and browse) button.
pub const CPF_NO_CLEAR: u64 = 0x0000_0000_0200_0000;
/// Edit this object reference inline.
pub const CPF_EDIT_INLINE: u64 = 0x0000_0000_0400_0000;
/// EditInline with notification to the owning object.
pub const CPF_EDIT_INLINE_NOTIFY: u64 = 0x0000_0000_0800_0000;
/// EditInline with Use button.
pub const CPF_EDIT_INLINE_USE: u64 = 0x0000_0000_1000_0000;
/// Property is deprecated. Read it from an archive, but don't save it.
pub const CPF_DEPRECATED: u64 = 0x0000_0000_2000_0000;
/// Indicates that this property should be exposed to data stores.
pub const CPF_DATA_BINDING: u64 = 0x0000_0000_4000_0000;
/// Native property should be serialized as text (ImportText, ExportText).
pub const CPF_SERIALIZE_TEXT: u64 = 0x0000_0000_8000_0000;
/// Notify actors when a property is replicated.
pub const CPF_REP_NOTIFY: u64 = 0x0000_0001_0000_0000;
/// Interpolatable property for use with matinee.
pub const CPF_INTERP: u64 = 0x0000_0002_0000_0000;
/// Property isn't transacted.
pub const CPF_NON_TRANSACTIONAL: u64 = 0x0000_0004_0000_0000;
/// Property should only be loaded in the editor.
pub const CPF_EDITOR_ONLY: u64 = 0x0000_0008_0000_0000;
/// Property should not be loaded on console (or be a console cooker commandlet).
pub const CPF_NOT_FOR_CONSOLE: u64 = 0x0000_0010_0000_0000;
/// Retry replication of this property if it fails to be fully sent.
pub const CPF_REP_RETRY: u64 = 0x0000_0020_0000_0000;
/// Property is const outside of the class it was declared in.
pub const CPF_PRIVATE_WRITE: u64 = 0x0000_0040_0000_0000;
/// Property is const outside of the class it was declared in and subclasses.
pub const CPF_PROTECTED_WRITE: u64 = 0x0000_0080_0000_0000;
/// Property should be ignored by archives which have ArIgnoreArchetypeRef set.
pub const CPF_ARCHETYPE_PROPERTY: u64 = 0x0000_0100_0000_0000;
/// Property should never be shown in a properties window.
pub const CPF_EDIT_HIDE: u64 = 0x0000_0200_0000_0000;
/// Property can be edited using a text dialog box.
pub const CPF_EDIT_TEXT_BOX: u64 = 0x0000_0400_0000_0000;
// 0x0000_0800_0000_0000: reserved
/// Property can point across levels, and will be serialized properly, but assumes it's target exists.
pub const CPF_CROSS_LEVEL_PASSIVE: u64 = 0x0000_1000_0000_0000;
/// Property can point across levels, and will be serialized properly, and will be updated when the target is streamed in/out.
pub const CPF_CROSS_LEVEL_ACTIVE: u64 = 0x0000_2000_0000_0000;

// Aliases printed by older generators

/// Pre-UE3 spelling of [`CPF_EDIT_FIXED_SIZE`].
pub const CPF_EDIT_CONST_ARRAY: u64 = CPF_EDIT_FIXED_SIZE;
/// Short spelling of [`CPF_EXPORT_OBJECT`].
pub const CPF_EXPORT: u64 = CPF_EXPORT_OBJECT;

// Combined CPF masks

/// All parameter flags.
pub const CPF_PARM_FLAGS: u64 =
    CPF_OPTIONAL_PARM | CPF_PARM | CPF_OUT_PARM | CPF_SKIP_PARM | CPF_RETURN_PARM | CPF_COERCE_PARM;

// ---------------------------------------------------------------------------
// Token spellings
// ---------------------------------------------------------------------------

/// Every flag spelling an SDK header may print, with its bit.
pub const PROPERTY_FLAGS: &[(&str, u64)] = &[
    ("CPF_Edit", CPF_EDIT),
    ("CPF_Const", CPF_CONST),
    ("CPF_Input", CPF_INPUT),
    ("CPF_ExportObject", CPF_EXPORT_OBJECT),
    ("CPF_Export", CPF_EXPORT),
    ("CPF_OptionalParm", CPF_OPTIONAL_PARM),
    ("CPF_Net", CPF_NET),
    ("CPF_EditFixedSize", CPF_EDIT_FIXED_SIZE),
    ("CPF_EditConstArray", CPF_EDIT_CONST_ARRAY),
    ("CPF_Parm", CPF_PARM),
    ("CPF_OutParm", CPF_OUT_PARM),
    ("CPF_SkipParm", CPF_SKIP_PARM),
    ("CPF_ReturnParm", CPF_RETURN_PARM),
    ("CPF_CoerceParm", CPF_COERCE_PARM),
    ("CPF_Native", CPF_NATIVE),
    ("CPF_Transient", CPF_TRANSIENT),
    ("CPF_Config", CPF_CONFIG),
    ("CPF_Localized", CPF_LOCALIZED),
    ("CPF_EditConst", CPF_EDIT_CONST),
    ("CPF_GlobalConfig", CPF_GLOBAL_CONFIG),
    ("CPF_Component", CPF_COMPONENT),
    ("CPF_AlwaysInit", CPF_ALWAYS_INIT),
    ("CPF_DuplicateTransient", CPF_DUPLICATE_TRANSIENT),
    ("CPF_NeedCtorLink", CPF_NEED_CTOR_LINK),
    ("CPF_NoExport", CPF_NO_EXPORT),
    ("CPF_NoImport", CPF_NO_IMPORT),
    ("CPF_NoClear", CPF_NO_CLEAR),
    ("CPF_EditInline", CPF_EDIT_INLINE),
    ("CPF_EditInlineNotify", CPF_EDIT_INLINE_NOTIFY),
    ("CPF_EditInlineUse", CPF_EDIT_INLINE_USE),
    ("CPF_Deprecated", CPF_DEPRECATED),
    ("CPF_DataBinding", CPF_DATA_BINDING),
    ("CPF_SerializeText", CPF_SERIALIZE_TEXT),
    ("CPF_RepNotify", CPF_REP_NOTIFY),
    ("CPF_Interp", CPF_INTERP),
    ("CPF_NonTransactional", CPF_NON_TRANSACTIONAL),
    ("CPF_EditorOnly", CPF_EDITOR_ONLY),
    ("CPF_NotForConsole", CPF_NOT_FOR_CONSOLE),
    ("CPF_RepRetry", CPF_REP_RETRY),
    ("CPF_PrivateWrite", CPF_PRIVATE_WRITE),
    ("CPF_ProtectedWrite", CPF_PROTECTED_WRITE),
    ("CPF_ArchetypeProperty", CPF_ARCHETYPE_PROPERTY),
    ("CPF_EditHide", CPF_EDIT_HIDE),
    ("CPF_EditTextBox", CPF_EDIT_TEXT_BOX),
    ("CPF_CrossLevelPassive", CPF_CROSS_LEVEL_PASSIVE),
    ("CPF_CrossLevelActive", CPF_CROSS_LEVEL_ACTIVE),
];

/// Look up the bit for a flag spelling. Case-sensitive, like the headers.
pub fn property_flag_bit(token: &str) -> Option<u64> {
    PROPERTY_FLAGS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|&(_, bit)| bit)
}
