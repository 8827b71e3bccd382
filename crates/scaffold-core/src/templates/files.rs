//! Contents of generated files

/// PostCSS config registering the Tailwind plugin and nothing else
pub const POSTCSS_CONFIG: &str = r#"export default {
  plugins: {
    "@tailwindcss/postcss": {},
  },
};
"#;

/// Replaces the generator's stylesheet entirely
pub const INDEX_CSS: &str = "@import \"tailwindcss\";\n";

const EXAMPLE_MARKUP: &str = r#"  return (
    <div className="max-w-md rounded-2xl bg-white p-8 shadow-lg ring-1 ring-gray-900/5">
      <p className="text-sm font-semibold uppercase tracking-wide text-sky-600">
        React + Tailwind CSS
      </p>
      <h1 className="mt-2 text-3xl font-bold tracking-tight text-gray-900">
        Your project is ready
      </h1>
      <p className="mt-4 text-gray-600">
        Edit <code className="rounded bg-gray-100 px-1.5 py-0.5 font-mono text-sm">src/components/Example</code> and
        save to see your changes.
      </p>
      <div className="mt-6 flex gap-3">
        <a
          href="https://tailwindcss.com/docs"
          className="rounded-lg bg-sky-600 px-4 py-2 text-sm font-semibold text-white shadow-sm hover:bg-sky-500"
        >
          Tailwind docs
        </a>
        <a
          href="https://react.dev"
          className="rounded-lg px-4 py-2 text-sm font-semibold text-gray-900 ring-1 ring-gray-300 hover:bg-gray-50"
        >
          React docs
        </a>
      </div>
    </div>
  );
"#;

const APP_MARKUP: &str = r#"  return (
    <div className="min-h-screen flex items-center justify-center bg-gray-100">
      <Example />
    </div>
  );
"#;

const REACT_IMPORT: &str = "import React from 'react';\n";

/// Static sample component, `src/components/Example.{jsx|tsx}`
pub fn example_component(use_typescript: bool) -> String {
    component("Example", "", EXAMPLE_MARKUP, use_typescript)
}

/// Root component rendering [`example_component`] centered in the viewport
pub fn app_component(use_typescript: bool) -> String {
    component(
        "App",
        "import Example from './components/Example';\n",
        APP_MARKUP,
        use_typescript,
    )
}

fn component(name: &str, imports: &str, markup: &str, use_typescript: bool) -> String {
    let mut source = String::new();
    if use_typescript {
        source.push_str(REACT_IMPORT);
    }
    source.push_str(imports);
    if !source.is_empty() {
        source.push('\n');
    }

    let signature = if use_typescript {
        format!("const {}: React.FC = () => {{\n", name)
    } else {
        format!("const {} = () => {{\n", name)
    };
    source.push_str(&signature);
    source.push_str(markup);
    source.push_str("};\n\n");
    source.push_str(&format!("export default {};\n", name));
    source
}
