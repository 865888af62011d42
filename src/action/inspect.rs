use crate::{
    command::action::inspect, container::RobotFile, error::all_error::AllError, utils,
};

pub(crate) async fn execute_inspect(action: inspect::Action) -> Result<(), AllError> {
    let filename = action
        .value
        .filename
        .ok_or_else(|| AllError::FileNotFound("No input file".to_owned()))?;

    let buffer = if let Ok(buffer) = tokio::fs::read(&filename).await {
        buffer
    } else {
        return Err(AllError::FileNotFound(filename));
    };

    let robot = RobotFile::from_bytes(&buffer)?;

    println!("Name: {}", robot.name);
    println!("Energy: {}", robot.energy);
    println!("Shield: {}", robot.shield);
    println!("Armor: {}", robot.armor);
    println!("CPU Speed: {}", robot.speed);
    println!("Bullet: {}", robot.bullet);
    println!("Missiles: {}", if robot.missiles { "Yes" } else { "No" });
    println!("Tactical Nukes: {}", if robot.tacnukes { "Yes" } else { "No" });
    println!(
        "Code is {}compiled.",
        if robot.compiled { "" } else { "un" }
    );

    if robot.compiled {
        println!("Size when compiled: {}", robot.bytecode.len());
        // 구획의 선두 워드는 코드 본문이 아니므로 목록에서 뺍니다.
        if robot.bytecode.len() > 1 {
            println!("{}", utils::prettify_bytecode(&robot.bytecode[1..]));
        }
    } else {
        println!("Uncompiled source code (Size: {})", robot.source.len());
        println!("{}", robot.source);
    }

    Ok(())
}
