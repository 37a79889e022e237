//! Template fixtures.

/// Three declared parameters, in a non-alphabetical order
pub const WEB_TEMPLATE_JSON: &str = r#"{"AWSTemplateFormatVersion":"2010-09-09","Description":"Web tier","Parameters":{"Env":{"Type":"String"},"Size":{"Type":"Number","Default":"1"},"Extra":{"Type":"String"}},"Resources":{"Queue":{"Type":"AWS::SQS::Queue"}}}"#;

/// Same document as `WEB_TEMPLATE_JSON`
pub const WEB_TEMPLATE_YAML: &str = r#"AWSTemplateFormatVersion: "2010-09-09"
Description: Web tier
Parameters:
  Env:
    Type: String
  Size:
    Type: Number
    Default: "1"
  Extra:
    Type: String
Resources:
  Queue:
    Type: AWS::SQS::Queue
"#;
