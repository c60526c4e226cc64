//! Builders for the two property-list documents inside a workflow bundle.
//!
//! Pure text generation, no I/O. Automator only recognizes the bundle if
//! the documents keep their exact shape, so the XML bodies are kept
//! verbatim rather than assembled through a plist library.

/// `Info.plist` service descriptor.
///
/// Registers the contextual menu item (`Upload to <engine> - <bucket>`)
/// and declares that the service accepts any file type.
#[must_use]
pub fn info_plist(engine: &str, bucket_name: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>NSServices</key>
	<array>
		<dict>
			<key>NSMenuItem</key>
			<dict>
				<key>default</key>
				<string>Upload to {engine} - {bucket_name}</string>
			</dict>
			<key>NSMessage</key>
			<string>runWorkflowAsService</string>
			<key>NSSendFileTypes</key>
			<array>
				<string>public.item</string>
			</array>
		</dict>
	</array>
</dict>
</plist>
"#
    )
}

/// `document.wflow` workflow action.
///
/// A single "Run Shell Script" action whose command invokes this tool's
/// `ship` operation with the verbatim endpoint; the selected files arrive
/// as shell arguments.
#[must_use]
pub fn document_wflow(endpoint: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>AMApplicationVersion</key>
    <string>2.8</string>
    <key>AMDocumentVersion</key>
    <string>2</string>
    <key>actions</key>
    <array>
        <dict>
            <key>action</key>
            <dict>
                <key>AMAccepts</key>
                <dict>
                    <key>Container</key>
                    <string>List</string>
                    <key>Optional</key>
                    <true/>
                    <key>Types</key>
                    <array>
                        <string>com.apple.cocoa.string</string>
                    </array>
                </dict>
                <key>AMActionVersion</key>
                <string>2.0.3</string>
                <key>ActionBundlePath</key>
                <string>/System/Library/Automator/Run Shell Script.action</string>
                <key>ActionName</key>
                <string>Run Shell Script</string>
                <key>ActionParameters</key>
                <dict>
                    <key>COMMAND_STRING</key>
                    <string>straightup ship {endpoint} "$@"</string>
                    <key>shell</key>
                    <string>/bin/zsh</string>
                </dict>
                <key>BundleIdentifier</key>
                <string>com.apple.RunShellScript</string>
                <key>Class Name</key>
                <string>RunShellScriptAction</string>
            </dict>
        </dict>
    </array>
</dict>
</plist>"#
    )
}
