use crate::{
    command::action::build, compiler::Compiler, error::all_error::AllError, utils,
    utils::logger::Logger, version::Version,
};

pub(crate) async fn execute_build(action: build::Action) -> Result<(), AllError> {
    let filename = action
        .value
        .filename
        .ok_or_else(|| AllError::FileNotFound("No input file".to_owned()))?;

    let text = if let Ok(text) = tokio::fs::read_to_string(&filename).await {
        text
    } else {
        return Err(AllError::FileNotFound(filename));
    };

    let version = action.value.target.parse::<Version>()?;

    let mut compiler = Compiler::new(text);
    match compiler.compile(version) {
        Ok(code) => {
            println!("{}", utils::prettify_code(compiler.code()));
            Logger::info(format!(
                "compiled {} words for version {}",
                code.len(),
                version
            ));

            Ok(())
        }
        Err(error) => {
            // 실패해도 그때까지 방출된 부분 출력은 보여줍니다.
            Logger::error(&error);
            println!("Incomplete code output:");
            println!("{}", utils::prettify_code(compiler.code()));

            Err(error)
        }
    }
}
