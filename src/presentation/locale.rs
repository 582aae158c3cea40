use crate::domain::model::NamingFormat;

/// User-facing strings for one display language.
pub struct Messages {
    pub input_prompt: &'static str,
    pub input_placeholder: &'static str,
    pub input_invalid: &'static str,
    pub progress_title: &'static str,
    pub pick_placeholder: &'static str,
    pub fallback_notice: &'static str,
    pub translate_failed: &'static str,
    pub operation_failed: &'static str,
    pub copy_failed: &'static str,
    pub copied: fn(&str, &str) -> String,
    pub describe: fn(NamingFormat) -> &'static str,
}

impl Messages {
    pub fn from_locale(locale: &str) -> Self {
        match locale.trim().to_lowercase().as_str() {
            "zh" | "zh-cn" | "zh_cn" | "cn" => Self::zh(),
            "en" | "" => Self::en(),
            _ => {
                tracing::warn!("unknown locale {:?}, using English", locale);
                Self::en()
            }
        }
    }

    fn en() -> Self {
        Self {
            input_prompt: "Enter the text to translate",
            input_placeholder: "e.g. 是否显示弹窗",
            input_invalid: "Please enter some text",
            progress_title: "Translating...",
            pick_placeholder: "Choose a naming format (Enter copies to clipboard)",
            fallback_notice: "The model's answer could not be used; showing a local approximation",
            translate_failed: "Translation failed",
            operation_failed: "Operation failed",
            copy_failed: "Copy failed",
            copied: |format, value| format!("Copied {}: {}", format, value),
            describe: |format| match format {
                NamingFormat::Camel => "Camel case - variable and function names",
                NamingFormat::Pascal => "Pascal case - class and component names",
                NamingFormat::Snake => "Snake case - Python identifiers and database columns",
                NamingFormat::Constant => "Constant case - constant definitions",
                NamingFormat::Kebab => "Kebab case - CSS class names and file names",
            },
        }
    }

    fn zh() -> Self {
        Self {
            input_prompt: "请输入要翻译的中文",
            input_placeholder: "例如：是否显示弹窗",
            input_invalid: "请输入有效的中文文本",
            progress_title: "正在翻译...",
            pick_placeholder: "选择要复制的命名格式（回车复制到剪贴板）",
            fallback_notice: "模型返回内容无法解析，以下为本地近似结果",
            translate_failed: "翻译失败",
            operation_failed: "操作失败",
            copy_failed: "复制失败",
            copied: |format, value| format!("已复制 {}: {}", format, value),
            describe: |format| match format {
                NamingFormat::Camel => "驼峰命名法 - 适用于变量名、函数名",
                NamingFormat::Pascal => "帕斯卡命名法 - 适用于类名、组件名",
                NamingFormat::Snake => "下划线命名法 - 适用于Python、数据库字段",
                NamingFormat::Constant => "常量命名法 - 适用于常量定义",
                NamingFormat::Kebab => "短横线命名法 - 适用于CSS类名、文件名",
            },
        }
    }
}
